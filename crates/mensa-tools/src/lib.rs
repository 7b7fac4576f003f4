//! Tool registry and built-in tools for mensa agents.
//!
//! This crate provides the tool abstraction for LLM function calling:
//!
//! - [`Tool`] — Trait for implementing tools
//! - [`ToolRegistry`] — Registry that validates and dispatches invocations
//! - [`MenuTool`] — Built-in canteen menu lookup
//!
//! # Implementing a Tool
//!
//! ```rust,ignore
//! use mensa_tools::{Tool, ToolError};
//! use async_trait::async_trait;
//!
//! struct GreeterTool;
//!
//! #[async_trait]
//! impl Tool for GreeterTool {
//!     fn name(&self) -> &str { "greeter" }
//!     fn description(&self) -> &str { "Greets a person by name" }
//!     fn parameters(&self) -> serde_json::Value {
//!         serde_json::json!({
//!             "type": "object",
//!             "properties": {
//!                 "name": { "type": "string" }
//!             },
//!             "required": ["name"]
//!         })
//!     }
//!     async fn execute(&self, args: serde_json::Value) -> Result<String, ToolError> {
//!         Ok(format!("Hello, {}!", args["name"].as_str().unwrap_or("there")))
//!     }
//! }
//! ```
//!
//! # Using the Registry
//!
//! ```rust,ignore
//! use mensa_tools::ToolRegistry;
//! use serde_json::json;
//!
//! let registry = ToolRegistry::with_defaults();
//! let schemas = registry.list();
//! let result = registry.invoke("getMenuTool", json!({"category": "lunch"})).await?;
//! ```

mod menu;

pub use menu::MenuTool;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

pub use mensa_core::{ToolCall, ToolSchema};

/// Errors that can occur during tool invocation.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Requested tool was not found in the registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Arguments did not satisfy the tool's declared schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed with a message.
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

/// Trait for implementing tools that can be called by the model.
///
/// Tools are the bridge between model reasoning and external lookups.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a description of what this tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for this tool's parameters.
    fn parameters(&self) -> serde_json::Value;

    /// Executes the tool with schema-validated arguments.
    async fn execute(&self, args: serde_json::Value) -> Result<String, ToolError>;

    /// Generates the schema for this tool (default implementation).
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Registry of tools available to the agent executor.
///
/// Invocations are validated against the tool's declared schema before the
/// handler runs: unknown tools, missing required fields, and fields of the
/// wrong declared type are caller errors.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in tools registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MenuTool::new());
        registry
    }

    /// Registers a tool in the registry.
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Returns true if a tool with the given name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns schemas for all registered tools.
    pub fn list(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Returns the names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Invokes a tool by name with raw JSON arguments.
    ///
    /// Validates the arguments against the tool's declared schema before the
    /// handler runs, then executes the handler synchronously.
    pub async fn invoke(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<String, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        validate_args(&tool.parameters(), &args)?;

        debug!("Invoking tool '{}'", name);
        let result = tool.execute(args).await?;
        debug!("Tool '{}' returned {} chars", name, result.len());

        Ok(result)
    }
}

/// Checks raw arguments against a tool's declared JSON Schema.
///
/// Covers the shapes the registry's tools declare: an object with `required`
/// fields and `string`-typed properties.
fn validate_args(schema: &serde_json::Value, args: &serde_json::Value) -> Result<(), ToolError> {
    let obj = args
        .as_object()
        .ok_or_else(|| ToolError::InvalidArguments("expected a JSON object".to_string()))?;

    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !obj.contains_key(field) {
                return Err(ToolError::InvalidArguments(format!(
                    "missing required field '{}'",
                    field
                )));
            }
        }
    }

    if let Some(props) = schema.get("properties").and_then(|p| p.as_object()) {
        for (field, spec) in props {
            let Some(value) = obj.get(field) else { continue };
            if spec.get("type").and_then(|t| t.as_str()) == Some("string") && !value.is_string() {
                return Err(ToolError::InvalidArguments(format!(
                    "field '{}' must be a string",
                    field
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes back the input"
        }

        fn parameters(&self) -> serde_json::Value {
            json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            })
        }

        async fn execute(&self, args: serde_json::Value) -> Result<String, ToolError> {
            Ok(args["message"].as_str().unwrap_or_default().to_string())
        }
    }

    #[tokio::test]
    async fn test_registry_basic() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        assert!(registry.has("echo"));
        assert!(!registry.has("nonexistent"));
        assert_eq!(registry.tool_names(), vec!["echo"]);
        assert_eq!(registry.list().len(), 1);
    }

    #[tokio::test]
    async fn test_registry_invoke() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry
            .invoke("echo", json!({"message": "hello"}))
            .await
            .unwrap();
        assert_eq!(result, "hello");
    }

    #[tokio::test]
    async fn test_registry_not_found() {
        let registry = ToolRegistry::new();
        let result = registry.invoke("nonexistent", json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_registry_rejects_missing_field() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry.invoke("echo", json!({})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_registry_rejects_wrong_type() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry.invoke("echo", json!({"message": 42})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_defaults_include_menu_tool() {
        let registry = ToolRegistry::with_defaults();
        assert!(registry.has("getMenuTool"));
    }
}
