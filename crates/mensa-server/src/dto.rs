//! Data transfer objects for the chat API.

use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub input: String,
}

/// Response body for the chat endpoint, success and failure alike.
#[derive(Debug, Serialize)]
pub struct ChatOutput {
    pub output: String,
}
