//! scamlure runtime configuration.
//!
//! Typed YAML schema with `${ENV_VAR}` substitution at load time and
//! startup validation. Missing generation credentials are a fatal
//! configuration error: no autonomous engagement is attempted without them.

pub mod env;
pub mod schema;

pub use env::{resolve_env_vars, resolve_env_vars_with};
pub use schema::{EngagementConfig, LlmConfig, LoggingConfig, PacingConfig, ScamLureConfig};

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use scamlure_core::ScamLureError;

/// Load a config file, substitute env vars, and validate.
pub fn load(path: &Path) -> Result<ScamLureConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let value: Value = serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;

    let value = resolve_env_vars(&value)?;

    let config: ScamLureConfig =
        serde_json::from_value(value).context("deserializing config after env substitution")?;

    validate(&config)?;
    Ok(config)
}

/// Load the config file when present, otherwise fall back to defaults.
/// The result is validated either way.
pub fn load_or_default(path: &Path) -> Result<ScamLureConfig> {
    if path.exists() {
        load(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        let config = ScamLureConfig::default();
        validate(&config)?;
        Ok(config)
    }
}

/// Startup validation. Fatal errors here mean the honeypot must not run.
pub fn validate(config: &ScamLureConfig) -> Result<(), ScamLureError> {
    match config.llm.provider.as_str() {
        "groq" => {
            let has_key = config
                .llm
                .api_key
                .as_deref()
                .is_some_and(|key| !key.trim().is_empty());
            if !has_key {
                return Err(ScamLureError::Config(
                    "llm.provider \"groq\" requires llm.api_key (e.g. \"${GROQ_API_KEY}\")"
                        .to_string(),
                ));
            }
        }
        "mock" => {}
        other => {
            return Err(ScamLureError::Config(format!(
                "unknown llm.provider \"{other}\" (expected \"groq\" or \"mock\")"
            )));
        }
    }

    if config.llm.timeout_secs == 0 {
        return Err(ScamLureError::Config(
            "llm.timeout_secs must be positive".to_string(),
        ));
    }

    let pacing = &config.engagement.pacing;
    if pacing.enabled && pacing.min_ms > pacing.max_ms {
        return Err(ScamLureError::Config(format!(
            "pacing range is inverted: min_ms {} > max_ms {}",
            pacing.min_ms, pacing.max_ms
        )));
    }

    if config.engagement.memory_capacity == 0 {
        return Err(ScamLureError::Config(
            "engagement.memory_capacity must be positive".to_string(),
        ));
    }

    if config.engagement.memory_window > config.engagement.memory_capacity {
        tracing::warn!(
            window = config.engagement.memory_window,
            capacity = config.engagement.memory_capacity,
            "memory_window exceeds memory_capacity; the transcript bounds it"
        );
    }

    Ok(())
}
