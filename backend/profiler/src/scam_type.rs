//! Scam-type profiler: maps an inbound message to a coarse scam category.
//!
//! Runs once per conversation, on the first scam-classified message, to pick
//! a persona. Categories are checked in declaration order; first match wins.

use scamlure_core::ScamCategory;

use crate::rules::{first_match, KeywordRule};

const SCAM_TYPE_RULES: &[KeywordRule<ScamCategory>] = &[
    KeywordRule {
        label: ScamCategory::Bank,
        keywords: &["bank", "kyc", "account", "upi", "blocked", "verify"],
    },
    KeywordRule {
        label: ScamCategory::Prize,
        keywords: &["won", "prize", "lottery", "reward", "gift"],
    },
    KeywordRule {
        label: ScamCategory::Job,
        keywords: &["job", "hiring", "salary", "interview"],
    },
    KeywordRule {
        label: ScamCategory::TechSupport,
        keywords: &["virus", "support", "technical", "computer"],
    },
    KeywordRule {
        label: ScamCategory::Investment,
        keywords: &["investment", "crypto", "profit", "trading"],
    },
    KeywordRule {
        label: ScamCategory::Otp,
        keywords: &["otp", "code", "verification"],
    },
];

/// Classify a message into a scam category. Case-insensitive, pure, and
/// always returns a value (`Unknown` when no keyword matches).
pub fn classify_scam_type(message: &str) -> ScamCategory {
    first_match(SCAM_TYPE_RULES, &message.to_lowercase(), ScamCategory::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_category() {
        assert_eq!(classify_scam_type("Your KYC is pending"), ScamCategory::Bank);
        assert_eq!(classify_scam_type("You WON a lottery!"), ScamCategory::Prize);
        assert_eq!(classify_scam_type("work from home job offer"), ScamCategory::Job);
        assert_eq!(classify_scam_type("your computer has a virus"), ScamCategory::TechSupport);
        assert_eq!(classify_scam_type("crypto trading profits"), ScamCategory::Investment);
        assert_eq!(classify_scam_type("enter the code we sent"), ScamCategory::Otp);
    }

    #[test]
    fn unknown_when_no_keyword() {
        assert_eq!(classify_scam_type("hello, how are you"), ScamCategory::Unknown);
        assert_eq!(classify_scam_type(""), ScamCategory::Unknown);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // "bank" (rule 1) and "prize" (rule 2) both present: bank wins.
        assert_eq!(
            classify_scam_type("claim your prize from the bank"),
            ScamCategory::Bank
        );
        // "otp" is listed last, so "verify" routes to bank first.
        assert_eq!(classify_scam_type("verify your otp"), ScamCategory::Bank);
    }
}
