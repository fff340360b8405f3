//! Typed runtime configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the scamlure runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ScamLureConfig {
    pub llm: LlmConfig,
    pub engagement: EngagementConfig,
    pub logging: LoggingConfig,
}

/// Generation gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LlmConfig {
    /// Provider name: "groq" or "mock".
    pub provider: String,
    pub model: String,
    /// API key, usually `${GROQ_API_KEY}` in the config file.
    pub api_key: Option<String>,
    /// Override for the provider's base URL.
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Hard bound on a single generation call, in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.7,
            max_tokens: 128,
            timeout_secs: 25,
        }
    }
}

/// Engagement engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngagementConfig {
    /// Transcript capacity in turns.
    pub memory_capacity: usize,
    /// Recent turns embedded in each prompt.
    pub memory_window: usize,
    pub pacing: PacingConfig,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            memory_capacity: 12,
            memory_window: 6,
            pacing: PacingConfig::default(),
        }
    }
}

/// Random outbound reply delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PacingConfig {
    pub enabled: bool,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_ms: 400,
            max_ms: 900,
        }
    }
}

/// Logging destinations and level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub level: String,
    /// Append-only NDJSON interaction log.
    pub interaction_log: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            level: "info".to_string(),
            interaction_log: PathBuf::from("logs/interactions.ndjson"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ScamLureConfig::default();
        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.llm.timeout_secs, 25);
        assert_eq!(config.engagement.memory_capacity, 12);
        assert!(config.engagement.pacing.min_ms <= config.engagement.pacing.max_ms);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: ScamLureConfig = serde_yaml::from_str("llm:\n  provider: mock\n").unwrap();
        assert_eq!(config.llm.provider, "mock");
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.engagement.memory_window, 6);
    }
}
