//! Trap-question rotation.
//!
//! Each stage carries two pre-authored verification questions designed to
//! stall the attacker and bait identifying details. Selection is uniform
//! among candidates not yet asked; once a stage's candidates are exhausted
//! the history clears and the full list is reused. Selection never blocks.

use rand::seq::SliceRandom;
use rand::Rng;

use scamlure_core::Stage;

use crate::engagement::EngagementState;

const OTP_TRAPS: &[&str] = &[
    "Can you confirm your employee ID?",
    "Why does my bank warn against sharing OTP?",
];
const PAYMENT_TRAPS: &[&str] = &[
    "Which branch are you calling from?",
    "Can I verify this with my bank first?",
];
const TRUST_TRAPS: &[&str] = &[
    "Should I note your full name?",
    "Do you have an official reference number?",
];
const INITIAL_TRAPS: &[&str] = &[
    "What is your official work number?",
    "Can I confirm this with customer service?",
];

pub(crate) fn traps_for(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::Otp => OTP_TRAPS,
        Stage::Payment => PAYMENT_TRAPS,
        Stage::Trust => TRUST_TRAPS,
        Stage::Initial => INITIAL_TRAPS,
    }
}

impl EngagementState {
    /// Pick the trap question the next reply must ask, avoiding repeats
    /// until the current stage's candidates are exhausted.
    pub fn select_trap<R: Rng>(&mut self, rng: &mut R) -> &'static str {
        let candidates = traps_for(self.stage);
        let available: Vec<&'static str> = candidates
            .iter()
            .copied()
            .filter(|trap| !self.trap_history.contains(trap))
            .collect();

        let pool = if available.is_empty() {
            self.trap_history.clear();
            candidates.to_vec()
        } else {
            available
        };

        let chosen = pool.choose(rng).copied().unwrap_or(candidates[0]);
        self.trap_history.push(chosen);
        chosen
    }
}
