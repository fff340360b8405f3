//! Engagement state machine.
//!
//! Owns the conversation stage, attacker style, score, counters, and trap
//! history, and mutates them in response to each inbound message. Every
//! operation here is a pure in-memory state transition with no failure mode.
//!
//! Stage transitions depend on the most recent inbound message only, with a
//! fixed priority: OTP keywords beat payment keywords beat trust keywords;
//! anything else leaves the stage unchanged (never reset to initial).

use scamlure_core::{ScammerStyle, Stage};

const OTP_KEYWORDS: &[&str] = &["otp"];
const PAYMENT_KEYWORDS: &[&str] = &["upi", "bank", "account", "payment", "transfer"];
const TRUST_KEYWORDS: &[&str] = &["verify", "confirm", "id", "official"];

/// Keywords that mark a turn as high financial risk for scoring.
const HIGH_RISK_KEYWORDS: &[&str] = &["otp", "upi", "transfer", "payment", "bank", "account"];

/// Per-category stage-entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounters {
    pub otp_requests: u32,
    pub payment_requests: u32,
    pub trust_attempts: u32,
}

/// Mutable per-conversation engagement state.
#[derive(Debug, Clone, Default)]
pub struct EngagementState {
    pub stage: Stage,
    pub style: ScammerStyle,
    /// Monotonically non-decreasing engagement score, reporting only.
    pub score: u32,
    /// Escalation counter, reserved for future pressure policy.
    pub frustration_level: u32,
    pub counters: StageCounters,
    pub(crate) trap_history: Vec<&'static str>,
}

impl EngagementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the stage-trigger keywords of the latest inbound message.
    pub fn update_stage(&mut self, message: &str) {
        let lower = message.to_lowercase();
        if contains_any(OTP_KEYWORDS, &lower) {
            self.stage = Stage::Otp;
            self.counters.otp_requests += 1;
        } else if contains_any(PAYMENT_KEYWORDS, &lower) {
            self.stage = Stage::Payment;
            self.counters.payment_requests += 1;
        } else if contains_any(TRUST_KEYWORDS, &lower) {
            self.stage = Stage::Trust;
            self.counters.trust_attempts += 1;
        }
        // No trigger: stage stays where it was.
    }

    /// Bump the score: +2 for high-risk turns, +1 otherwise. Never decreases.
    pub fn update_score(&mut self, message: &str) {
        let lower = message.to_lowercase();
        self.score += if contains_any(HIGH_RISK_KEYWORDS, &lower) { 2 } else { 1 };
    }

    /// Victim emotion matching the current stage, fed into the prompt.
    pub fn emotional_state(&self) -> &'static str {
        match self.stage {
            Stage::Otp => "panicked and scared",
            Stage::Payment => "worried and confused",
            Stage::Trust => "uncertain but cooperative",
            Stage::Initial => "mildly confused",
        }
    }
}

fn contains_any(keywords: &[&str], text_lower: &str) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_keyword_outranks_payment_and_trust() {
        let mut state = EngagementState::new();
        state.update_stage("share your OTP to verify the bank transfer");
        assert_eq!(state.stage, Stage::Otp);
        assert_eq!(state.counters.otp_requests, 1);
        assert_eq!(state.counters.payment_requests, 0);
        assert_eq!(state.counters.trust_attempts, 0);
    }

    #[test]
    fn payment_then_trust_priority() {
        let mut state = EngagementState::new();
        state.update_stage("send the payment and we will verify");
        assert_eq!(state.stage, Stage::Payment);

        let mut state = EngagementState::new();
        state.update_stage("please verify your identity");
        assert_eq!(state.stage, Stage::Trust);
    }

    #[test]
    fn stage_is_sticky_without_triggers() {
        let mut state = EngagementState::new();
        state.update_stage("your UPI account needs attention");
        assert_eq!(state.stage, Stage::Payment);
        state.update_stage("hello, are you there?");
        assert_eq!(state.stage, Stage::Payment);
    }

    #[test]
    fn transition_depends_only_on_latest_message() {
        // Same message, different histories: same transition.
        let mut from_initial = EngagementState::new();
        from_initial.update_stage("what is your otp");

        let mut from_payment = EngagementState::new();
        from_payment.update_stage("bank payment pending");
        from_payment.update_stage("what is your otp");

        assert_eq!(from_initial.stage, from_payment.stage);
    }

    #[test]
    fn score_is_monotonic() {
        let mut state = EngagementState::new();
        let messages = [
            "hello there",
            "your bank account is blocked",
            "nothing special",
            "send the OTP now",
        ];
        let mut previous = 0;
        for message in messages {
            state.update_score(message);
            assert!(state.score > previous);
            previous = state.score;
        }
        // High-risk turns score +2, others +1.
        assert_eq!(state.score, 1 + 2 + 1 + 2);
    }

    #[test]
    fn emotional_state_tracks_stage() {
        let mut state = EngagementState::new();
        assert_eq!(state.emotional_state(), "mildly confused");
        state.update_stage("otp please");
        assert_eq!(state.emotional_state(), "panicked and scared");
        state.stage = Stage::Trust;
        assert_eq!(state.emotional_state(), "uncertain but cooperative");
    }
}
