//! Bounded tool-calling agent executor for mensa.
//!
//! This crate provides the control logic of an agent turn:
//!
//! - [`AgentExecutor`] — Runs at most `max_iterations` reasoning steps
//! - [`PromptTemplate`] — Fixed three-message prompt seeding each turn
//!
//! # Execution Model
//!
//! Per turn the executor renders the prompt (system instruction, user input,
//! scratchpad) and asks the model whether to answer directly or invoke a
//! tool. A direct answer ends the turn. A tool call is executed through the
//! [`ToolRegistry`], recorded as an intermediate step, and fed back into the
//! scratchpad; once the iteration budget is spent the executor stops without
//! a further model call and the turn degrades to the recorded observation.
//! The default budget is one iteration.
//!
//! ```rust,ignore
//! use mensa_agent::AgentExecutor;
//!
//! let executor = AgentExecutor::new(model, registry);
//! let turn = executor.invoke("What's for lunch?").await?;
//! match turn.outcome {
//!     AgentOutcome::FinalAnswer(text) => println!("{}", text),
//!     AgentOutcome::ToolFallback => println!("{:?}", turn.first_observation()),
//!     AgentOutcome::NoAnswer => println!("no answer"),
//! }
//! ```

mod prompt;

pub use prompt::{PromptTemplate, SYSTEM_PROMPT};

use std::sync::Arc;

use mensa_core::{AgentError, AgentOutcome, AgentTurn, IntermediateStep};
use mensa_llm::{ChatModel, ChatResponse};
use mensa_tools::ToolRegistry;
use tracing::{debug, info, warn};

/// Default cap on reasoning iterations per turn.
pub const DEFAULT_MAX_ITERATIONS: usize = 1;

/// Orchestrates one agent turn: prompt rendering, the model call, and at
/// most `max_iterations` tool invocations.
///
/// Constructed once at startup and shared across requests; holds no mutable
/// state between turns.
pub struct AgentExecutor {
    model: Arc<dyn ChatModel>,
    registry: Arc<ToolRegistry>,
    template: PromptTemplate,
    max_iterations: usize,
}

impl AgentExecutor {
    /// Creates an executor with the default prompt and iteration budget.
    pub fn new(model: Arc<dyn ChatModel>, registry: Arc<ToolRegistry>) -> Self {
        Self {
            model,
            registry,
            template: PromptTemplate::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Overrides the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Overrides the prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Runs one agent turn for the given user input.
    ///
    /// Never fails for a well-formed model reply; only faults from the model
    /// call itself propagate as `Err`.
    pub async fn invoke(&self, input: &str) -> Result<AgentTurn, AgentError> {
        let schemas = self.registry.list();
        let mut scratchpad = String::new();
        let mut steps: Vec<IntermediateStep> = Vec::new();
        let mut iteration = 0;

        while iteration < self.max_iterations {
            let messages = self.template.render(input, &scratchpad);
            debug!("Iteration {}: sending prompt with {} tools", iteration, schemas.len());

            match self.model.chat_with_tools(&messages, &schemas).await? {
                ChatResponse::Content(response) => {
                    if response.content.is_empty() {
                        break;
                    }
                    info!("Model answered directly after {} tool steps", steps.len());
                    return Ok(AgentTurn {
                        outcome: AgentOutcome::FinalAnswer(response.content),
                        intermediate_steps: steps,
                    });
                }
                ChatResponse::ToolCalls { calls, .. } => {
                    let Some(call) = calls.into_iter().next() else {
                        warn!("Model returned a tool-call reply with no calls");
                        break;
                    };

                    info!("Model requested tool '{}'", call.name);
                    let observation = match self
                        .registry
                        .invoke(&call.name, call.arguments.clone())
                        .await
                    {
                        Ok(result) => result,
                        // A rejected invocation is a failed tool step, not a
                        // turn failure.
                        Err(e) => {
                            warn!("Tool '{}' failed: {}", call.name, e);
                            e.to_string()
                        }
                    };

                    if !scratchpad.is_empty() {
                        scratchpad.push('\n');
                    }
                    scratchpad.push_str(&observation);

                    steps.push(IntermediateStep {
                        tool_name: call.name,
                        tool_input: call.arguments,
                        observation,
                    });
                    iteration += 1;
                }
            }
        }

        let outcome = if steps.is_empty() {
            AgentOutcome::NoAnswer
        } else {
            info!("Iteration budget spent after {} tool steps", steps.len());
            AgentOutcome::ToolFallback
        };

        Ok(AgentTurn {
            outcome,
            intermediate_steps: steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mensa_core::{Message, ToolCall, ToolSchema};
    use mensa_llm::{LlmMetrics, LlmResponse};
    use serde_json::json;

    /// Always answers with fixed text.
    struct AnswerModel(&'static str);

    #[async_trait]
    impl ChatModel for AnswerModel {
        async fn chat_with_tools(
            &self,
            _messages: &[Message],
            _tools: &[ToolSchema],
        ) -> Result<ChatResponse, AgentError> {
            Ok(ChatResponse::Content(LlmResponse {
                content: self.0.to_string(),
                metrics: LlmMetrics::default(),
            }))
        }
    }

    /// Always requests the given tool call.
    struct ToolCallModel {
        name: &'static str,
        arguments: serde_json::Value,
    }

    #[async_trait]
    impl ChatModel for ToolCallModel {
        async fn chat_with_tools(
            &self,
            _messages: &[Message],
            _tools: &[ToolSchema],
        ) -> Result<ChatResponse, AgentError> {
            Ok(ChatResponse::ToolCalls {
                calls: vec![ToolCall {
                    id: "call_0".to_string(),
                    name: self.name.to_string(),
                    arguments: self.arguments.clone(),
                }],
                metrics: LlmMetrics::default(),
            })
        }
    }

    /// Always fails, like an unreachable upstream API.
    struct FaultModel;

    #[async_trait]
    impl ChatModel for FaultModel {
        async fn chat_with_tools(
            &self,
            _messages: &[Message],
            _tools: &[ToolSchema],
        ) -> Result<ChatResponse, AgentError> {
            Err(AgentError::LlmError("connection refused".to_string()))
        }
    }

    /// Returns a tool-call reply containing no calls.
    struct EmptyCallsModel;

    #[async_trait]
    impl ChatModel for EmptyCallsModel {
        async fn chat_with_tools(
            &self,
            _messages: &[Message],
            _tools: &[ToolSchema],
        ) -> Result<ChatResponse, AgentError> {
            Ok(ChatResponse::ToolCalls {
                calls: vec![],
                metrics: LlmMetrics::default(),
            })
        }
    }

    fn executor(model: impl ChatModel + 'static) -> AgentExecutor {
        AgentExecutor::new(Arc::new(model), Arc::new(ToolRegistry::with_defaults()))
    }

    #[tokio::test]
    async fn test_direct_answer() {
        let turn = executor(AnswerModel("Hi! How can I help you today?"))
            .invoke("Hello")
            .await
            .unwrap();

        assert_eq!(
            turn.outcome,
            AgentOutcome::FinalAnswer("Hi! How can I help you today?".to_string())
        );
        assert!(turn.intermediate_steps.is_empty());
    }

    #[tokio::test]
    async fn test_tool_call_exhausts_budget() {
        let model = ToolCallModel {
            name: "getMenuTool",
            arguments: json!({"category": "lunch"}),
        };
        let turn = executor(model).invoke("What's for lunch?").await.unwrap();

        assert_eq!(turn.outcome, AgentOutcome::ToolFallback);
        assert_eq!(turn.intermediate_steps.len(), 1);

        let step = &turn.intermediate_steps[0];
        assert_eq!(step.tool_name, "getMenuTool");
        assert_eq!(step.tool_input, json!({"category": "lunch"}));
        assert_eq!(step.observation, "butter Paneer , Dal Fry , Jeera Rice , Roti");
        assert_eq!(
            turn.first_observation(),
            Some("butter Paneer , Dal Fry , Jeera Rice , Roti")
        );
    }

    #[tokio::test]
    async fn test_recorded_final_output_is_max_iterations_message() {
        let model = ToolCallModel {
            name: "getMenuTool",
            arguments: json!({"category": "dinner"}),
        };
        let turn = executor(model).invoke("dinner please").await.unwrap();

        assert_eq!(turn.final_output(), mensa_core::MAX_ITERATIONS_MESSAGE);
    }

    #[tokio::test]
    async fn test_model_fault_propagates() {
        let result = executor(FaultModel).invoke("Hello").await;
        assert!(matches!(result, Err(AgentError::LlmError(_))));
    }

    #[tokio::test]
    async fn test_degenerate_reply_is_no_answer() {
        let turn = executor(EmptyCallsModel).invoke("Hello").await.unwrap();
        assert_eq!(turn.outcome, AgentOutcome::NoAnswer);
        assert!(turn.intermediate_steps.is_empty());
    }

    #[tokio::test]
    async fn test_hallucinated_tool_becomes_failed_step() {
        let model = ToolCallModel {
            name: "no_such_tool",
            arguments: json!({}),
        };
        let turn = executor(model).invoke("anything").await.unwrap();

        assert_eq!(turn.outcome, AgentOutcome::ToolFallback);
        assert_eq!(turn.intermediate_steps.len(), 1);
        assert!(turn.intermediate_steps[0]
            .observation
            .contains("Tool not found"));
    }

    #[tokio::test]
    async fn test_invalid_arguments_become_failed_step() {
        let model = ToolCallModel {
            name: "getMenuTool",
            arguments: json!({"category": 7}),
        };
        let turn = executor(model).invoke("anything").await.unwrap();

        assert_eq!(turn.intermediate_steps.len(), 1);
        assert!(turn.intermediate_steps[0]
            .observation
            .contains("Invalid arguments"));
    }
}
