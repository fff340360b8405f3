use anyhow::Result;
use async_trait::async_trait;

use crate::types::{TurnRecord, Verdict};

/// Trait for text-generation providers behind the engagement engine.
///
/// The engine treats every implementation as unreliable: calls are bounded by
/// a timeout and any failure degrades to a fixed fallback reply.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., "groq", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the response text.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;
}

/// Trait for the scam/not-scam classifier boundary.
///
/// Implementations are pure over the message text and must always return a
/// verdict; there is no failure mode at this boundary.
pub trait FraudClassifier: Send + Sync {
    fn analyze(&self, message: &str) -> Verdict;
}

/// Append-only sink for per-turn interaction records.
///
/// Each record is a self-contained unit; implementations must tolerate
/// interleaved appends from concurrent conversations.
pub trait InteractionSink: Send + Sync {
    fn record(&self, record: &TurnRecord) -> Result<()>;
}

/// Request to an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}
