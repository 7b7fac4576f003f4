//! Canteen menu lookup tool.

use async_trait::async_trait;
use serde_json::json;

use crate::{Tool, ToolError};

/// Fallback returned when the requested category has no menu entry.
pub const NO_MENU_MESSAGE: &str = "No menu found for that category";

/// Today's menu by category. Immutable for the process lifetime.
const MENUS: [(&str, &str); 3] = [
    ("breakfast", "Aloo Paratha, Poha, Idli ,Dosa , Masala chai"),
    ("lunch", "butter Paneer , Dal Fry , Jeera Rice , Roti"),
    ("dinner", "Veg Biryani, Raita, Salad , Gulab Jamun"),
];

/// Menu lookup tool — returns today's menu for a given category.
///
/// The handler is pure: it reads only the static menu table and never errors
/// for schema-conforming input. An unknown category yields the fixed
/// [`NO_MENU_MESSAGE`] fallback rather than an error.
pub struct MenuTool;

impl MenuTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MenuTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for MenuTool {
    fn name(&self) -> &str {
        "getMenuTool"
    }

    fn description(&self) -> &str {
        "Return the final answer for today's menu for the given category (breakfast, lunch,or dinner). Use this tool to directly answer the user's menu questions."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "Type of food. Example: breakfast,lunch,dinner"
                }
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String, ToolError> {
        let category = args
            .get("category")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ToolError::InvalidArguments("missing required field 'category'".to_string())
            })?;

        let normalized = category.to_lowercase();
        let menu = MENUS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, menu)| *menu)
            .unwrap_or(NO_MENU_MESSAGE);

        Ok(menu.to_string())
    }
}
