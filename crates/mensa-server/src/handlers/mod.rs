//! HTTP route handlers for the chat server.

pub mod chat;

use axum::response::Html;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Serves the bundled chat page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
