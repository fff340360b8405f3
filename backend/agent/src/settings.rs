use std::time::Duration;

use scamlure_memory::DEFAULT_CAPACITY;

/// Tunables for the engagement engine, passed in at construction time.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Model requested from the generation provider.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Hard bound on a single generation call. Expiry degrades to the
    /// fallback reply, never to an error.
    pub gateway_timeout: Duration,
    /// Transcript capacity in turns.
    pub memory_capacity: usize,
    /// How many recent turns the prompt embeds.
    pub memory_window: usize,
    /// Optional random outbound delay; `None` disables pacing.
    pub pacing: Option<PacingRange>,
}

/// Bounds for the random pacing delay, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct PacingRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.7,
            max_tokens: 128,
            gateway_timeout: Duration::from_secs(25),
            memory_capacity: DEFAULT_CAPACITY,
            memory_window: 6,
            pacing: None,
        }
    }
}
