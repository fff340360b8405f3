//! Scam/not-scam classifier boundary.
//!
//! The engagement engine only consumes the `FraudClassifier` trait; this
//! crate ships the commodity keyword-scored implementation. Each high-risk
//! keyword found in the message boosts confidence by a fixed step, capped at
//! 0.95. A single keyword match is enough to engage.

use tracing::debug;

use scamlure_core::{Decision, FraudClassifier, Verdict};

/// Keywords strongly associated with scam attempts.
const HIGH_RISK_KEYWORDS: &[&str] = &[
    "otp",
    "transfer",
    "upi",
    "bank",
    "account",
    "payment",
    "lottery",
    "reward",
    "verify",
    "blocked",
    "processing fee",
];

/// Base confidence assigned when at least one keyword matches.
const BASE_CONFIDENCE: f64 = 0.45;
/// Per-keyword confidence boost.
const KEYWORD_BOOST: f64 = 0.1;
/// Confidence is capped below certainty.
const CONFIDENCE_CAP: f64 = 0.95;
/// Confidence reported for messages with no keyword signal.
const NO_SIGNAL_CONFIDENCE: f64 = 0.1;

/// Keyword-boosted scam classifier.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl FraudClassifier for KeywordClassifier {
    fn analyze(&self, message: &str) -> Verdict {
        let lower = message.to_lowercase();
        let matches = HIGH_RISK_KEYWORDS
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count();

        let is_scam = matches >= 1;
        let confidence = if is_scam {
            (BASE_CONFIDENCE + KEYWORD_BOOST * matches as f64).min(CONFIDENCE_CAP)
        } else {
            NO_SIGNAL_CONFIDENCE
        };

        debug!(matches, confidence, is_scam, "classified inbound message");

        Verdict {
            is_scam,
            confidence,
            decision: if is_scam {
                Decision::EngageScammer
            } else {
                Decision::Ignore
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_message_is_ignored() {
        let verdict = KeywordClassifier::new().analyze("see you at lunch tomorrow");
        assert!(!verdict.is_scam);
        assert_eq!(verdict.decision, Decision::Ignore);
        assert!(verdict.confidence < 0.5);
    }

    #[test]
    fn keyword_hit_engages() {
        let verdict = KeywordClassifier::new().analyze("Your bank account is blocked");
        assert!(verdict.is_scam);
        assert_eq!(verdict.decision, Decision::EngageScammer);
    }

    #[test]
    fn confidence_grows_with_matches_and_caps() {
        let classifier = KeywordClassifier::new();
        let one = classifier.analyze("pay the processing fee").confidence;
        let many = classifier
            .analyze("verify your otp to unblock the bank account, pay the transfer processing fee")
            .confidence;
        assert!(many > one);
        assert!(many <= 0.95);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(KeywordClassifier::new().analyze("URGENT: OTP required").is_scam);
    }

    #[test]
    fn empty_message_is_low_signal() {
        let verdict = KeywordClassifier::new().analyze("");
        assert!(!verdict.is_scam);
    }
}
