//! Prompt template for agent turns.

use mensa_core::Message;

/// Fixed system instruction seeding every agent turn.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that uses tools when needed.";

/// Renders the fixed three-message prompt for an agent turn.
///
/// Pure function of its inputs: system instruction, the user's literal
/// input, and the scratchpad accumulated from prior tool steps in this turn
/// (empty at turn start).
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system: String,
}

impl PromptTemplate {
    /// Creates the template with the default system instruction.
    pub fn new() -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
        }
    }

    /// Creates a template with a custom system instruction.
    pub fn with_system(system: impl Into<String>) -> Self {
        Self { system: system.into() }
    }

    /// Renders the three-part message sequence for one model call.
    pub fn render(&self, input: &str, scratchpad: &str) -> Vec<Message> {
        vec![
            Message::system(&self.system),
            Message::user(input),
            Message::assistant(scratchpad),
        ]
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensa_core::MessageRole;

    #[test]
    fn test_render_three_messages() {
        let template = PromptTemplate::new();
        let messages = template.render("What's for lunch?", "");

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "What's for lunch?");
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert_eq!(messages[2].content, "");
    }

    #[test]
    fn test_render_carries_scratchpad() {
        let template = PromptTemplate::new();
        let messages = template.render("Hello", "observation from a tool");

        assert_eq!(messages[2].content, "observation from a tool");
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = PromptTemplate::new();
        let first = template.render("input", "pad");
        let second = template.render("input", "pad");

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.role, b.role);
            assert_eq!(a.content, b.content);
        }
    }
}
