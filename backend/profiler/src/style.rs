//! Attacker-style profiler.
//!
//! Recomputed fresh from the latest inbound message on every turn; no
//! smoothing or history. The resulting volatility is deliberate and pinned
//! by a test below.

use scamlure_core::ScammerStyle;

use crate::rules::{first_match, KeywordRule};

const STYLE_RULES: &[KeywordRule<ScammerStyle>] = &[
    KeywordRule {
        label: ScammerStyle::Aggressive,
        keywords: &["urgent", "immediately", "now", "otp", "closed"],
    },
    KeywordRule {
        label: ScammerStyle::Authority,
        keywords: &["sir", "dear", "official", "customer"],
    },
    KeywordRule {
        label: ScammerStyle::Technical,
        keywords: &["install", "app", "download", "link"],
    },
];

/// Profile the attacker's style from a single message.
/// Defaults to `Friendly` when no keyword matches.
pub fn profile_style(message: &str) -> ScammerStyle {
    first_match(STYLE_RULES, &message.to_lowercase(), ScammerStyle::Friendly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friendly_by_default() {
        assert_eq!(profile_style("hello friend"), ScammerStyle::Friendly);
    }

    #[test]
    fn aggressive_outranks_authority() {
        // "now" (aggressive) and "sir" (authority) both match; the aggressive
        // rule is declared first and wins deterministically.
        assert_eq!(
            profile_style("Please share your OTP 4521 now, sir"),
            ScammerStyle::Aggressive
        );
    }

    #[test]
    fn authority_and_technical_match() {
        assert_eq!(profile_style("Dear customer, greetings"), ScammerStyle::Authority);
        assert_eq!(profile_style("please install this app"), ScammerStyle::Technical);
    }

    #[test]
    fn profiling_is_memoryless() {
        // Each call sees only its own message; an aggressive turn leaves no
        // residue on the next.
        assert_eq!(profile_style("act NOW or account closed"), ScammerStyle::Aggressive);
        assert_eq!(profile_style("thanks, talk soon"), ScammerStyle::Friendly);
        assert_eq!(profile_style("act NOW or account closed"), ScammerStyle::Aggressive);
    }
}
