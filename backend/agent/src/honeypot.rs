//! Per-conversation turn orchestration.
//!
//! `HoneypotAgent` owns one conversation with one attacker: persona,
//! engagement state, transcript, and the injected generation provider and
//! interaction sink. `reply` runs the eleven-step turn sequence in strict
//! order and is infallible to the caller: every failure inside a turn has a
//! defined degraded-but-safe output.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use uuid::Uuid;

use scamlure_core::{
    InteractionSink, LlmProvider, LlmRequest, Persona, ScammerStyle, Stage, TurnRecord,
};
use scamlure_memory::{Speaker, Transcript};
use scamlure_profiler::{classify_scam_type, extract_intel, persona_for, profile_style};

use crate::engagement::EngagementState;
use crate::firewall;
use crate::prompt::{build_request, Strategy};
use crate::settings::EngineConfig;

/// The stateful dialogue controller for a single conversation.
pub struct HoneypotAgent {
    id: Uuid,
    config: EngineConfig,
    provider: Arc<dyn LlmProvider>,
    sink: Arc<dyn InteractionSink>,
    persona: Option<Persona>,
    state: EngagementState,
    transcript: Transcript,
    rng: StdRng,
}

impl HoneypotAgent {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        sink: Arc<dyn InteractionSink>,
        config: EngineConfig,
    ) -> Self {
        Self::build(provider, sink, config, StdRng::from_entropy())
    }

    /// Deterministic variant for tests: all trap/strategy/pacing draws come
    /// from the seeded generator.
    pub fn with_seed(
        provider: Arc<dyn LlmProvider>,
        sink: Arc<dyn InteractionSink>,
        config: EngineConfig,
        seed: u64,
    ) -> Self {
        Self::build(provider, sink, config, StdRng::seed_from_u64(seed))
    }

    fn build(
        provider: Arc<dyn LlmProvider>,
        sink: Arc<dyn InteractionSink>,
        config: EngineConfig,
        rng: StdRng,
    ) -> Self {
        let transcript = Transcript::new(config.memory_capacity);
        Self {
            id: Uuid::new_v4(),
            config,
            provider,
            sink,
            persona: None,
            state: EngagementState::new(),
            transcript,
            rng,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The persona, once assigned on the first inbound message.
    pub fn persona(&self) -> Option<&Persona> {
        self.persona.as_ref()
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn style(&self) -> ScammerStyle {
        self.state.style
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn frustration_level(&self) -> u32 {
        self.state.frustration_level
    }

    /// Process one inbound attacker message and produce the outbound reply.
    ///
    /// The steps form a dependency chain and run strictly in order; no error
    /// escapes to the caller.
    pub async fn reply(&mut self, inbound: &str) -> String {
        let persona = self.persona_for_turn(inbound);

        self.state.style = profile_style(inbound);
        self.state.update_stage(inbound);
        self.state.update_score(inbound);
        self.transcript.push(Speaker::Scammer, inbound);

        let trap = self.state.select_trap(&mut self.rng);
        let strategy = Strategy::pick(&mut self.rng);
        let recent = self.transcript.render(self.config.memory_window);
        let request = build_request(&self.config, &persona, &self.state, trap, strategy, &recent);

        let raw = self.generate(&request).await;
        let reply = firewall::apply(&raw);

        self.transcript.push(Speaker::Victim, reply.clone());
        let intel = extract_intel(inbound);

        let record = TurnRecord {
            timestamp: Utc::now(),
            conversation_id: self.id,
            scammer_message: inbound.to_string(),
            honeypot_reply: reply.clone(),
            stage: self.state.stage,
            score: self.state.score,
            frustration_level: self.state.frustration_level,
            scammer_style: self.state.style,
            intel,
        };
        if let Err(error) = self.sink.record(&record) {
            warn!(conversation = %self.id, %error, "failed to append interaction record");
        }

        self.pace().await;

        info!(
            conversation = %self.id,
            stage = %self.state.stage,
            style = %self.state.style,
            score = self.state.score,
            "turn completed"
        );
        reply
    }

    /// Assign the persona on the first turn; return it on every turn.
    fn persona_for_turn(&mut self, inbound: &str) -> Persona {
        if let Some(persona) = &self.persona {
            return persona.clone();
        }
        let category = classify_scam_type(inbound);
        let persona = persona_for(category);
        info!(
            conversation = %self.id,
            persona = %persona.name,
            ?category,
            "persona assigned"
        );
        self.persona = Some(persona.clone());
        persona
    }

    /// Bounded gateway call. Timeout, transport failure, and empty content
    /// all degrade to the fixed fallback reply.
    async fn generate(&self, request: &LlmRequest) -> String {
        let call = self.provider.complete(request);
        match tokio::time::timeout(self.config.gateway_timeout, call).await {
            Ok(Ok(response)) if !response.content.trim().is_empty() => {
                debug!(
                    provider = self.provider.name(),
                    latency_ms = response.latency_ms,
                    "generation succeeded"
                );
                response.content
            }
            Ok(Ok(_)) => {
                warn!(provider = self.provider.name(), "empty completion, using fallback reply");
                firewall::FALLBACK_REPLY.to_string()
            }
            Ok(Err(error)) => {
                warn!(provider = self.provider.name(), %error, "generation failed, using fallback reply");
                firewall::FALLBACK_REPLY.to_string()
            }
            Err(_) => {
                warn!(
                    provider = self.provider.name(),
                    timeout_ms = self.config.gateway_timeout.as_millis() as u64,
                    "generation timed out, using fallback reply"
                );
                firewall::FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Optional outbound pacing: a small random delay throttling reply rate.
    async fn pace(&mut self) {
        if let Some(range) = self.config.pacing {
            let (lo, hi) = (range.min_ms, range.max_ms.max(range.min_ms));
            let delay = self.rng.gen_range(lo..=hi);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }
}
