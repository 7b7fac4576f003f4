//! LLM client abstraction for the mensa agent.
//!
//! This crate defines the narrow model boundary the agent executor talks to:
//!
//! - [`ChatModel`] — Object-safe trait: rendered prompt + tool schemas in,
//!   final text or structured tool calls out
//! - [`LlmClient`] — OpenAI-compatible implementation over `async-openai`
//! - [`ChatResponse`], [`LlmResponse`], [`LlmMetrics`] — Response types
//!
//! The trait keeps the request path free of a live network dependency:
//! tests substitute deterministic stubs for [`LlmClient`].
//!
//! # Tool Calling
//!
//! ```rust,ignore
//! use mensa_llm::{ChatModel, ChatResponse, LlmClient};
//! use mensa_core::{Message, ModelSettings};
//!
//! let client = LlmClient::new(ModelSettings::default());
//! let response = client.chat_with_tools(&messages, &tools).await?;
//! match response {
//!     ChatResponse::Content(resp) => println!("{}", resp.content),
//!     ChatResponse::ToolCalls { calls, .. } => {
//!         for call in calls {
//!             println!("{}({})", call.name, call.arguments);
//!         }
//!     }
//! }
//! ```

mod client;

pub use client::LlmClient;
pub use mensa_core::{ToolCall, ToolSchema};

use async_trait::async_trait;
use mensa_core::{AgentError, Message};

/// Token usage and timing metrics from an LLM call.
#[derive(Debug, Clone, Default)]
pub struct LlmMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

/// Complete text response from an LLM call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub metrics: LlmMetrics,
}

/// Response from the model: either final text or tool call requests.
#[derive(Debug, Clone)]
pub enum ChatResponse {
    Content(LlmResponse),
    ToolCalls { calls: Vec<ToolCall>, metrics: LlmMetrics },
}

/// The model boundary the agent executor depends on.
///
/// Given a rendered prompt and the available tool schemas, the model returns
/// either a final text answer or a structured tool invocation request.
/// Object-safe so executors can hold `Arc<dyn ChatModel>` and tests can
/// substitute scripted implementations.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends the rendered prompt with tool schemas and returns the reply.
    async fn chat_with_tools(
        &self,
        messages: &[Message],
        tools: &[ToolSchema],
    ) -> Result<ChatResponse, AgentError>;
}
