//! Opportunistic attacker-intelligence extraction.
//!
//! Regex-only scan of the raw inbound message for payment-handle-like tokens,
//! URLs, and long digit runs. Purely observational: the findings feed the
//! interaction log and never influence conversation state.

use once_cell::sync::Lazy;
use regex::Regex;

use scamlure_core::IntelFindings;

static PAYMENT_HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.-]+@\w+\b").expect("payment handle regex"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("link regex"));
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4,}\b").expect("number regex"));

/// Extract structured findings from an inbound message.
/// Categories with no matches stay empty and are omitted when serialized.
pub fn extract_intel(message: &str) -> IntelFindings {
    IntelFindings {
        payment_handles: PAYMENT_HANDLE_RE
            .find_iter(message)
            .map(|m| m.as_str().to_string())
            .collect(),
        links: LINK_RE
            .find_iter(message)
            .map(|m| m.as_str().to_string())
            .collect(),
        numbers: NUMBER_RE
            .find_iter(message)
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_digit_runs_of_four_or_more() {
        let intel = extract_intel("Please share your OTP 4521 now, sir");
        assert_eq!(intel.numbers, vec!["4521"]);
        assert!(intel.links.is_empty());
    }

    #[test]
    fn short_digit_runs_are_ignored() {
        let intel = extract_intel("call me at 911 or 123");
        assert!(intel.numbers.is_empty());
    }

    #[test]
    fn finds_links_and_handles() {
        let intel = extract_intel("Pay to merchant@upi via http://paypal-verify-a1b2.com/login");
        assert_eq!(intel.payment_handles, vec!["merchant@upi"]);
        assert_eq!(intel.links, vec!["http://paypal-verify-a1b2.com/login"]);
    }

    #[test]
    fn empty_message_yields_no_findings() {
        assert!(extract_intel("").is_empty());
        assert!(extract_intel("nothing suspicious here").is_empty());
    }
}
