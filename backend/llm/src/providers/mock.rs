use anyhow::{bail, Result};
use async_trait::async_trait;

use scamlure_core::{LlmProvider, LlmRequest, LlmResponse};

/// A mock LLM provider with canned responses, for tests and offline runs.
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
    always_fail: bool,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            always_fail: false,
        }
    }

    /// Respond with a fixed string instead of the default.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Fail every completion, for exercising the fallback path.
    pub fn failing(mut self) -> Self {
        self.always_fail = true;
        self
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, _req: &LlmRequest) -> Result<LlmResponse> {
        if self.always_fail {
            bail!("mock provider configured to fail");
        }
        Ok(LlmResponse {
            content: self
                .fixed_response
                .clone()
                .unwrap_or_else(|| "Oh dear, I do not follow. Could you explain once more?".to_string()),
            provider: self.name.clone(),
            model: "mock".to_string(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}
