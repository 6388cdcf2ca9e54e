//! Client configuration

use serde::{Deserialize, Serialize};

/// Generative client configuration, the `[genai]` section of vitrine.toml.
///
/// Every field has a sensible default so an empty section (or none at all)
/// yields a working client, minus the API key which must come from the file
/// or the environment.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenAiConfig {
    /// API key; `None` falls back to the environment at construction.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Service root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds between video operation polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Maximum number of polls before a video job is abandoned.
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_poll_interval() -> u64 {
    5
}

fn default_max_poll_attempts() -> u32 {
    60
}

fn default_request_timeout() -> u64 {
    120
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            poll_interval_secs: default_poll_interval(),
            max_poll_attempts: default_max_poll_attempts(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl GenAiConfig {
    /// Defaults plus the API key from `VITRINE_API_KEY`, falling back to
    /// `GEMINI_API_KEY`. Empty values count as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.api_key = std::env::var("VITRINE_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|key| !key.is_empty());
        config
    }

    /// Fills a missing API key from the environment, keeping an explicit
    /// key untouched.
    pub fn with_env_fallback(mut self) -> Self {
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            self.api_key = Self::from_env().api_key;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenAiConfig::default();
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.max_poll_attempts, 60);
        assert_eq!(config.request_timeout_secs, 120);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_empty_toml_section_uses_defaults() {
        let config: GenAiConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, GenAiConfig::default().base_url);
        assert_eq!(config.max_poll_attempts, 60);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: GenAiConfig = toml::from_str(
            "api_key = \"k\"\nmax_poll_attempts = 3\n",
        )
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.max_poll_attempts, 3);
        assert_eq!(config.poll_interval_secs, 5);
    }

    #[test]
    fn test_explicit_key_survives_env_fallback() {
        let config = GenAiConfig {
            api_key: Some("explicit".to_string()),
            ..GenAiConfig::default()
        };
        assert_eq!(
            config.with_env_fallback().api_key.as_deref(),
            Some("explicit")
        );
    }
}
