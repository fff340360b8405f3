pub mod groq;
pub mod mock;

use std::collections::HashMap;
use std::sync::Arc;

use scamlure_core::{LlmProvider, ScamLureError};

/// Registry of LLM providers, looked up by configured name.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn LlmProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider by name.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn LlmProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Look up a provider by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn LlmProvider>, ScamLureError> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| ScamLureError::UnknownProvider(name.to_string()))
    }

    /// All registered provider names.
    pub fn list(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
