//! Multi-conversation flow controller.
//!
//! Gates inbound messages through the fraud classifier and multiplexes
//! engaged conversations by channel id. Conversations are fully isolated:
//! each agent sits behind its own async mutex, so turns within one
//! conversation serialize while distinct conversations proceed concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use scamlure_core::{
    FraudClassifier, InteractionSink, LlmProvider, ScammerStyle, Stage, Verdict,
};

use crate::honeypot::HoneypotAgent;
use crate::settings::EngineConfig;

/// Outcome of processing one inbound message through the flow controller.
#[derive(Debug, Clone)]
pub struct FlowOutcome {
    pub verdict: Verdict,
    /// The honeypot reply; `None` when the message was not engaged.
    pub reply: Option<String>,
    pub stage: Option<Stage>,
    pub style: Option<ScammerStyle>,
    pub score: u32,
}

/// Classifier-gated engagement across independent attacker channels.
pub struct HoneypotEngine {
    classifier: Arc<dyn FraudClassifier>,
    provider: Arc<dyn LlmProvider>,
    sink: Arc<dyn InteractionSink>,
    config: EngineConfig,
    seed: Option<u64>,
    conversations: Mutex<HashMap<String, Arc<Mutex<HoneypotAgent>>>>,
}

impl HoneypotEngine {
    pub fn new(
        classifier: Arc<dyn FraudClassifier>,
        provider: Arc<dyn LlmProvider>,
        sink: Arc<dyn InteractionSink>,
        config: EngineConfig,
    ) -> Self {
        Self {
            classifier,
            provider,
            sink,
            config,
            seed: None,
            conversations: Mutex::new(HashMap::new()),
        }
    }

    /// Seed every spawned agent's RNG, for deterministic tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Classify one inbound message and engage the honeypot when it is a
    /// scam. Never fails; non-scam messages produce a log-only outcome.
    pub async fn process(&self, channel: &str, message: &str) -> FlowOutcome {
        let verdict = self.classifier.analyze(message);
        info!(
            channel,
            is_scam = verdict.is_scam,
            confidence = verdict.confidence,
            "classified inbound message"
        );

        if !verdict.is_scam {
            debug!(channel, "ignoring non-scam message");
            return FlowOutcome {
                verdict,
                reply: None,
                stage: None,
                style: None,
                score: 0,
            };
        }

        let agent = self.conversation(channel).await;
        let mut agent = agent.lock().await;
        let reply = agent.reply(message).await;

        FlowOutcome {
            verdict,
            reply: Some(reply),
            stage: Some(agent.stage()),
            style: Some(agent.style()),
            score: agent.score(),
        }
    }

    /// Number of conversations engaged so far.
    pub async fn conversation_count(&self) -> usize {
        self.conversations.lock().await.len()
    }

    async fn conversation(&self, channel: &str) -> Arc<Mutex<HoneypotAgent>> {
        let mut conversations = self.conversations.lock().await;
        conversations
            .entry(channel.to_string())
            .or_insert_with(|| {
                let agent = match self.seed {
                    Some(seed) => HoneypotAgent::with_seed(
                        self.provider.clone(),
                        self.sink.clone(),
                        self.config.clone(),
                        seed,
                    ),
                    None => HoneypotAgent::new(
                        self.provider.clone(),
                        self.sink.clone(),
                        self.config.clone(),
                    ),
                };
                Arc::new(Mutex::new(agent))
            })
            .clone()
    }
}
