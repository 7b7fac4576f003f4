//! OpenAI-compatible chat client with tool calling.
//!
//! Works with the OpenAI API and any compatible endpoint. The API key is
//! sourced from the process environment (`OPENAI_API_KEY`) by the underlying
//! SDK configuration.

use std::time::Instant;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionTool, ChatCompletionToolType, CreateChatCompletionRequestArgs,
        FunctionObject,
    },
    Client,
};
use async_trait::async_trait;
use mensa_core::{AgentError, Message, MessageRole, ModelSettings, ToolCall, ToolSchema};
use tracing::info;

use crate::{ChatModel, ChatResponse, LlmMetrics, LlmResponse};

/// Converts any error into an AgentError::LlmError.
fn llm_err(e: impl ToString) -> AgentError {
    AgentError::LlmError(e.to_string())
}

/// Converts domain messages into the SDK's request message types.
fn to_request_messages(
    messages: &[Message],
) -> Result<Vec<ChatCompletionRequestMessage>, AgentError> {
    messages
        .iter()
        .map(|msg| {
            let request_msg = match msg.role {
                MessageRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessageArgs::default()
                        .content(&*msg.content)
                        .build()
                        .map_err(llm_err)?,
                ),
                MessageRole::User => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(&*msg.content)
                        .build()
                        .map_err(llm_err)?,
                ),
                MessageRole::Assistant => ChatCompletionRequestMessage::Assistant(
                    ChatCompletionRequestAssistantMessageArgs::default()
                        .content(&*msg.content)
                        .build()
                        .map_err(llm_err)?,
                ),
            };
            Ok(request_msg)
        })
        .collect()
}

/// Client for OpenAI-compatible chat completion APIs.
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    settings: ModelSettings,
}

impl LlmClient {
    /// Creates a new client with the given model settings.
    ///
    /// The API key comes from `OPENAI_API_KEY` in the process environment.
    pub fn new(settings: ModelSettings) -> Self {
        Self {
            client: Client::with_config(OpenAIConfig::default()),
            settings,
        }
    }

    /// Creates a client for an alternative API base URL.
    pub fn with_api_base(settings: ModelSettings, api_base: &str) -> Self {
        let config = OpenAIConfig::new().with_api_base(api_base);
        Self {
            client: Client::with_config(config),
            settings,
        }
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn chat_with_tools(
        &self,
        messages: &[Message],
        tools: &[ToolSchema],
    ) -> Result<ChatResponse, AgentError> {
        let start = Instant::now();

        let request_messages = to_request_messages(messages)?;

        let openai_tools: Vec<ChatCompletionTool> = tools
            .iter()
            .map(|t| ChatCompletionTool {
                r#type: ChatCompletionToolType::Function,
                function: FunctionObject {
                    name: t.name.clone(),
                    description: Some(t.description.clone()),
                    parameters: Some(t.parameters.clone()),
                    strict: None,
                },
            })
            .collect();

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.settings.model)
            .max_completion_tokens(self.settings.max_output_tokens)
            .temperature(self.settings.temperature)
            .messages(request_messages);

        if !openai_tools.is_empty() {
            request_builder.tools(openai_tools);
        }

        let request = request_builder.build().map_err(llm_err)?;
        let response = self.client.chat().create(request).await.map_err(llm_err)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let (input_tokens, output_tokens) = response
            .usage
            .as_ref()
            .map(|u| (u.prompt_tokens, u.completion_tokens))
            .unwrap_or((0, 0));

        let metrics = LlmMetrics { input_tokens, output_tokens, elapsed_ms };

        info!(
            "LLM: {}ms, tokens: {}/{} (in/out)",
            elapsed_ms, input_tokens, output_tokens
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::LlmError("No response choices".into()))?;

        // Check for tool calls
        if let Some(tool_calls) = choice.message.tool_calls {
            if !tool_calls.is_empty() {
                let calls = tool_calls
                    .into_iter()
                    .map(|tc| {
                        let args: serde_json::Value = serde_json::from_str(&tc.function.arguments)
                            .unwrap_or(serde_json::Value::Null);
                        ToolCall {
                            id: tc.id,
                            name: tc.function.name,
                            arguments: args,
                        }
                    })
                    .collect();
                return Ok(ChatResponse::ToolCalls { calls, metrics });
            }
        }

        let content = choice
            .message
            .content
            .ok_or_else(|| AgentError::LlmError("No response content".into()))?;

        Ok(ChatResponse::Content(LlmResponse { content, metrics }))
    }
}
