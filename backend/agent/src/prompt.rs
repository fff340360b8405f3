//! Generation prompt builder.
//!
//! Deterministic string composition: persona, engagement state, one trap
//! question, one per-turn strategy, and the recent transcript window are
//! assembled into a single bounded request. No generation happens here.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use scamlure_core::{LlmRequest, Persona};

use crate::engagement::EngagementState;
use crate::settings::EngineConfig;

/// Interaction strategy stated in the prompt, drawn independently each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Delay,
    Emotional,
    Confusion,
    Verification,
    FakeCompliance,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Delay,
        Strategy::Emotional,
        Strategy::Confusion,
        Strategy::Verification,
        Strategy::FakeCompliance,
    ];

    /// Uniform choice; not tracked across turns.
    pub fn pick<R: Rng>(rng: &mut R) -> Strategy {
        *Strategy::ALL.as_slice().choose(rng).unwrap_or(&Strategy::Delay)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Delay => "delay",
            Strategy::Emotional => "emotional",
            Strategy::Confusion => "confusion",
            Strategy::Verification => "verification",
            Strategy::FakeCompliance => "fake_compliance",
        };
        write!(f, "{s}")
    }
}

/// Compose the generation request for the current turn.
pub(crate) fn build_request(
    config: &EngineConfig,
    persona: &Persona,
    state: &EngagementState,
    trap: &str,
    strategy: Strategy,
    recent: &str,
) -> LlmRequest {
    let user_prompt = format!(
        "You are a real human scam victim talking to a scammer.\n\
         ABSOLUTE RULES:\n\
         - Never share OTP, passwords, numbers, or banking info\n\
         - Never agree to send information\n\
         - Never mention AI or automation\n\
         \n\
         ACTIVE STRATEGY: {strategy}\n\
         \n\
         Ask exactly ONE verification question: \"{trap}\"\n\
         \n\
         STATE:\n\
         Stage: {stage}\n\
         Emotion: {emotion}\n\
         Scammer style: {style}\n\
         Frustration: {frustration}\n\
         \n\
         PERSONA:\n\
         {persona}\n\
         \n\
         RECENT CONVERSATION:\n\
         {recent}\n\
         \n\
         OUTPUT RULES:\n\
         - 1-2 short sentences\n\
         - Natural human tone\n\
         - End with a question\n\
         \n\
         Victim:",
        stage = state.stage,
        emotion = state.emotional_state(),
        style = state.style,
        frustration = state.frustration_level,
        persona = persona.prompt,
    );

    LlmRequest {
        model: config.model.clone(),
        system_prompt: String::new(),
        user_prompt,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use scamlure_core::Stage;

    fn persona() -> Persona {
        Persona {
            name: "elderly_person".into(),
            prompt: "You are an elderly person scared about bank problems.".into(),
        }
    }

    #[test]
    fn prompt_embeds_trap_strategy_persona_and_history() {
        let mut state = EngagementState::new();
        state.update_stage("otp now");
        let request = build_request(
            &EngineConfig::default(),
            &persona(),
            &state,
            "Can you confirm your employee ID?",
            Strategy::Verification,
            "Scammer: give me the otp",
        );
        assert!(request.user_prompt.contains("Can you confirm your employee ID?"));
        assert!(request.user_prompt.contains("ACTIVE STRATEGY: verification"));
        assert!(request.user_prompt.contains("scared about bank problems"));
        assert!(request.user_prompt.contains("Scammer: give me the otp"));
        assert!(request.user_prompt.contains("Stage: otp"));
        assert!(request.user_prompt.contains("Never mention AI or automation"));
    }

    #[test]
    fn prompt_is_deterministic_given_inputs() {
        let state = EngagementState::new();
        let a = build_request(&EngineConfig::default(), &persona(), &state, "t", Strategy::Delay, "");
        let b = build_request(&EngineConfig::default(), &persona(), &state, "t", Strategy::Delay, "");
        assert_eq!(a.user_prompt, b.user_prompt);
        assert_eq!(state.stage, Stage::Initial);
    }

    #[test]
    fn strategy_pick_covers_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..32 {
            let strategy = Strategy::pick(&mut rng);
            assert!(Strategy::ALL.contains(&strategy));
        }
    }
}
