//! Core domain types and error definitions for mensa.
//!
//! This crate provides the fundamental types shared across the mensa service:
//!
//! - [`AgentError`] — Error type for agent and LLM operations
//! - [`Message`] and [`MessageRole`] — Prompt message types
//! - [`ModelSettings`] — LLM model configuration
//! - [`ToolCall`] and [`ToolSchema`] — Tool interaction types
//! - [`AgentTurn`], [`AgentOutcome`], [`IntermediateStep`] — Turn results
//!
//! # Example
//!
//! ```rust
//! use mensa_core::{Message, MessageRole, ModelSettings};
//!
//! let msg = Message::user("What's for lunch?");
//! assert_eq!(msg.role, MessageRole::User);
//!
//! let settings = ModelSettings::default();
//! assert_eq!(settings.temperature, 0.7);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while running an agent turn.
#[derive(Error, Debug)]
pub enum AgentError {
    /// LLM API request failed.
    #[error("LLM request failed: {0}")]
    LlmError(String),

    /// Failed to parse structured output from the LLM.
    #[error("Failed to parse model output: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::ParseError(err.to_string())
    }
}

/// Role of a message in a prompt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Fixed system instruction.
    System,
    /// Message from the user.
    User,
    /// Message from the assistant/LLM (used for the agent scratchpad).
    Assistant,
}

/// A single message in a rendered prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: MessageRole::System, content: content.into() }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }

    /// Creates a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Assistant, content: content.into() }
    }
}

/// Configuration for the hosted chat-completion model.
///
/// Read once at startup and shared by the model client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// The model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    /// Cap on generated tokens per response.
    pub max_output_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 2048,
            temperature: 0.7,
        }
    }
}

// ============================================================================
// Tool Types
// ============================================================================

/// A tool call requested by the LLM.
///
/// When the model decides to use a tool it returns one or more `ToolCall`
/// instances with the tool name and arguments to execute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier assigned by the model to this call.
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments to pass to the tool (JSON object).
    pub arguments: serde_json::Value,
}

/// JSON schema describing a tool for LLM function calling.
///
/// Follows the OpenAI function calling format and is used to inform the
/// model about available tools and their parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique name of the tool (e.g., "getMenuTool").
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema object describing the tool's parameters.
    pub parameters: serde_json::Value,
}

// ============================================================================
// Turn Results
// ============================================================================

/// Serialized `final_output` of a turn that exhausted its iteration budget.
///
/// Kept for the recorded turn format only; outcome selection goes through
/// [`AgentOutcome`], never through comparison against this string.
pub const MAX_ITERATIONS_MESSAGE: &str = "Agent stopped due to max iterations.";

/// Record of one tool invocation made during an agent turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntermediateStep {
    /// Name of the invoked tool.
    pub tool_name: String,
    /// Arguments the tool was invoked with.
    pub tool_input: serde_json::Value,
    /// String result returned by the tool (or its error display on failure).
    pub observation: String,
}

/// How an agent turn concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    /// The model answered directly.
    FinalAnswer(String),
    /// The iteration budget was exhausted after a tool call; callers fall
    /// back to the first recorded observation.
    ToolFallback,
    /// The model produced neither an answer nor a usable tool result.
    NoAnswer,
}

/// Result of a single agent turn. Read-only after creation.
#[derive(Debug, Clone)]
pub struct AgentTurn {
    /// How the turn concluded.
    pub outcome: AgentOutcome,
    /// Ordered record of tool invocations made during the turn.
    pub intermediate_steps: Vec<IntermediateStep>,
}

impl AgentTurn {
    /// The turn's final output string as it appears in the recorded turn:
    /// the answer text, the max-iterations message, or empty.
    pub fn final_output(&self) -> &str {
        match &self.outcome {
            AgentOutcome::FinalAnswer(text) => text,
            AgentOutcome::ToolFallback => MAX_ITERATIONS_MESSAGE,
            AgentOutcome::NoAnswer => "",
        }
    }

    /// Observation of the first recorded tool step, if any.
    pub fn first_observation(&self) -> Option<&str> {
        self.intermediate_steps
            .first()
            .map(|s| s.observation.as_str())
    }
}
