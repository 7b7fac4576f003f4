//! Environment-driven server configuration, read once at startup.

use std::env;

use mensa_core::ModelSettings;

/// Default port the server binds to.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind on.
    pub port: u16,
    /// Model identifier, token cap, and temperature.
    pub model: ModelSettings,
    /// Whether an API key is present in the environment.
    pub has_api_key: bool,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// Recognized variables: `PORT`, `MENSA_MODEL`, `OPENAI_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("PORT").ok(),
            env::var("MENSA_MODEL").ok(),
            env::var("OPENAI_API_KEY").is_ok(),
        )
    }

    fn from_values(port: Option<String>, model: Option<String>, has_api_key: bool) -> Self {
        let port = port
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let mut settings = ModelSettings::default();
        if let Some(model) = model {
            settings.model = model;
        }

        Self {
            port,
            model: settings,
            has_api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_values(None, None, false);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.model.max_output_tokens, 2048);
        assert!(!config.has_api_key);
    }

    #[test]
    fn test_overrides() {
        let config =
            ServerConfig::from_values(Some("8080".into()), Some("gpt-4o".into()), true);
        assert_eq!(config.port, 8080);
        assert_eq!(config.model.model, "gpt-4o");
        assert!(config.has_api_key);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = ServerConfig::from_values(Some("not-a-port".into()), None, false);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
