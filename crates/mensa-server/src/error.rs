//! Application error types and Axum response conversion.
//!
//! Both variants map to 500 with a fixed `{"output": ...}` body; internal
//! error detail is never exposed to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::ChatOutput;

/// Body returned when the agent produced neither an answer nor a tool result.
pub const NO_ANSWER_MESSAGE: &str = "Agent couldn't find a valid answer.";

/// Body returned when the executor itself faulted.
pub const UPSTREAM_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    /// The agent turn completed but yielded nothing usable.
    NoAnswer,
    /// The model call (or other executor machinery) faulted.
    Upstream,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::NoAnswer => NO_ANSWER_MESSAGE,
            AppError::Upstream => UPSTREAM_MESSAGE,
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatOutput { output: message.to_string() }),
        )
            .into_response()
    }
}
