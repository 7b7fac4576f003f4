//! HTTP server entry point and Axum router setup.
//!
//! Initializes the server state (model client, tool registry, agent
//! executor) once at startup, configures routes, and starts the Axum server.

mod config;
mod dto;
mod error;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use mensa_agent::AgentExecutor;
use mensa_llm::LlmClient;
use mensa_tools::ToolRegistry;

use crate::config::ServerConfig;

/// Shared server state accessible from all handlers.
///
/// Built once in `main` and passed explicitly via axum state; request
/// handlers hold no ambient globals.
pub struct ServerState {
    pub executor: AgentExecutor,
}

/// Builds the application router over the given state.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .layer(trace_layer)
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env();
    if !config.has_api_key {
        warn!("OPENAI_API_KEY is not set; model calls will fail");
    }

    let registry = Arc::new(ToolRegistry::with_defaults());
    info!("Registered {} tools", registry.list().len());

    let model = Arc::new(LlmClient::new(config.model.clone()));
    info!("Model: {}", config.model.model);

    let executor = AgentExecutor::new(model, registry);
    let state = Arc::new(ServerState { executor });

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
