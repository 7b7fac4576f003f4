//! Chat endpoint: runs one agent turn and maps its outcome to a response.

use std::sync::Arc;

use axum::{extract::State, Json};
use mensa_core::AgentOutcome;
use tracing::{error, info};

use crate::dto::{ChatOutput, ChatRequest};
use crate::error::AppError;
use crate::ServerState;

/// `POST /api/chat` — forwards the user's message to the agent executor.
///
/// Response selection, in order: the model's direct answer; else the first
/// recorded tool observation when the iteration budget ran out; else a 500
/// with a fixed body. Executor faults map to a generic 500.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatOutput>, AppError> {
    info!("Chat input: {}", req.input);

    let turn = state.executor.invoke(&req.input).await.map_err(|e| {
        error!("Agent execution failed: {}", e);
        AppError::Upstream
    })?;

    if let AgentOutcome::FinalAnswer(output) = turn.outcome {
        return Ok(Json(ChatOutput { output }));
    }

    match turn.first_observation() {
        Some(observation) => Ok(Json(ChatOutput {
            output: observation.to_string(),
        })),
        None => Err(AppError::NoAnswer),
    }
}
