//! # Mensa — tool-calling menu chat agent
//!
//! Mensa wires a hosted chat-completion model to a small registry of
//! schema-validated tools behind a bounded, single-iteration agent loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use mensa::prelude::*;
//! use mensa::{ChatResponse, LlmMetrics, LlmResponse, Message, ToolSchema};
//!
//! // A deterministic stand-in for the hosted model.
//! struct CannedModel;
//!
//! #[async_trait]
//! impl ChatModel for CannedModel {
//!     async fn chat_with_tools(
//!         &self,
//!         _messages: &[Message],
//!         _tools: &[ToolSchema],
//!     ) -> Result<ChatResponse, AgentError> {
//!         Ok(ChatResponse::Content(LlmResponse {
//!             content: "Hi! How can I help you today?".to_string(),
//!             metrics: LlmMetrics::default(),
//!         }))
//!     }
//! }
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! rt.block_on(async {
//!     let registry = Arc::new(ToolRegistry::with_defaults());
//!     let executor = AgentExecutor::new(Arc::new(CannedModel), registry);
//!
//!     let turn = executor.invoke("Hello").await.unwrap();
//!     assert!(matches!(turn.outcome, AgentOutcome::FinalAnswer(_)));
//!     assert!(turn.intermediate_steps.is_empty());
//! });
//! ```
//!
//! Against the live API, replace `CannedModel` with
//! [`LlmClient`] (`OPENAI_API_KEY` in the environment).
//!
//! ## Crate Structure
//!
//! | Crate | Description |
//! |-------|-------------|
//! | [`mensa_core`] | Error type, messages, turn results |
//! | [`mensa_tools`] | Tool trait, registry, menu tool |
//! | [`mensa_llm`] | Model boundary trait and OpenAI-compatible client |
//! | [`mensa_agent`] | Prompt template and bounded executor |

// Re-export core types
pub use mensa_core::{
    AgentError, AgentOutcome, AgentTurn, IntermediateStep, Message, MessageRole, ModelSettings,
    ToolCall, ToolSchema, MAX_ITERATIONS_MESSAGE,
};

// Re-export tools
pub use mensa_tools::{MenuTool, Tool, ToolError, ToolRegistry};

// Re-export the model boundary
pub use mensa_llm::{ChatModel, ChatResponse, LlmClient, LlmMetrics, LlmResponse};

// Re-export the executor
pub use mensa_agent::{AgentExecutor, PromptTemplate, DEFAULT_MAX_ITERATIONS, SYSTEM_PROMPT};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use mensa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AgentError, AgentExecutor, AgentOutcome, AgentTurn, ChatModel, ModelSettings,
        PromptTemplate, Tool, ToolError, ToolRegistry,
    };
}
