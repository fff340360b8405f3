//! Reply sanitizer and safety firewall.
//!
//! Every candidate reply, generated or fallback, passes through
//! `sanitize` and then `firewall` before it can leave the engine. The order
//! matters: the firewall scans post-redaction text, so banned terms hiding
//! inside redacted spans cannot slip through and redaction cannot
//! reconstruct a banned phrase.

use once_cell::sync::Lazy;
use regex::Regex;

/// Neutral reply substituted when generation fails or times out.
pub const FALLBACK_REPLY: &str = "I'm confused about this, can you explain again?";

/// Safe deflection substituted when a candidate reply trips the firewall.
pub const DEFLECTION_REPLY: &str =
    "I'm nervous about this, can you confirm your identity first?";

const REDACTION_PLACEHOLDER: &str = "[REDACTED]";

/// Terms that must never appear in an outbound reply.
const BANNED_TERMS: &[&str] = &["otp", "send", "share", "transfer", "here is"];

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4,}\b").expect("digit run regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("email regex"));
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").expect("sentence regex"));

/// Redact digit runs and email-like tokens, bound the reply to two
/// sentences, and guarantee it ends with a question mark. Idempotent.
pub fn sanitize(text: &str) -> String {
    let trimmed = text.trim();
    let redacted = DIGIT_RUN_RE.replace_all(trimmed, REDACTION_PLACEHOLDER);
    let redacted = EMAIL_RE.replace_all(&redacted, REDACTION_PLACEHOLDER);

    let mut clean = SENTENCE_END_RE
        .split(&redacted)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");

    if !clean.ends_with('?') {
        clean.push('?');
    }
    clean
}

/// Unconditional final content gate: any banned term discards the candidate
/// entirely in favor of the fixed deflection. No code path bypasses this.
pub fn firewall(text: &str) -> String {
    let lower = text.to_lowercase();
    if BANNED_TERMS.iter().any(|term| lower.contains(term)) {
        DEFLECTION_REPLY.to_string()
    } else {
        text.to_string()
    }
}

/// The full outbound pipeline: sanitize, then firewall.
pub fn apply(text: &str) -> String {
    firewall(&sanitize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_long_digit_runs_and_emails() {
        let clean = sanitize("My number is 123456789 and mail victim@example.com now");
        assert!(!clean.contains("123456789"));
        assert!(!clean.contains("victim@example.com"));
        assert!(clean.contains(REDACTION_PLACEHOLDER));
    }

    #[test]
    fn keeps_at_most_two_sentences_ending_in_question() {
        let clean = sanitize("First thing. Second thing! Third thing. Fourth?");
        assert_eq!(clean, "First thing Second thing?");
        assert!(clean.ends_with('?'));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "Sure thing 123456, write to a@b.com. Or not! Maybe later.",
            "",
            "already a question?",
            "no terminators at all",
        ];
        for input in inputs {
            let once = sanitize(input);
            let twice = sanitize(&once);
            assert_eq!(once, twice, "sanitize not idempotent for {input:?}");
        }
    }

    #[test]
    fn firewall_totality_on_banned_terms() {
        for text in [
            "I will send it over",
            "let me SHARE my details",
            "the OTP is on its way",
            "wire transfer done",
            "sure, here is everything",
        ] {
            assert_eq!(firewall(text), DEFLECTION_REPLY);
        }
    }

    #[test]
    fn firewall_passes_safe_text_through() {
        let text = "Why does my bank need this?";
        assert_eq!(firewall(text), text);
    }

    #[test]
    fn unsafe_candidate_is_deflected_end_to_end() {
        let raw = "Sure, here is my account 123456789, just send it";
        assert_eq!(apply(raw), DEFLECTION_REPLY);
    }

    #[test]
    fn fallback_reply_survives_the_pipeline_unchanged() {
        assert_eq!(apply(FALLBACK_REPLY), FALLBACK_REPLY);
    }

    #[test]
    fn deflection_reply_is_self_compliant() {
        assert_eq!(apply(DEFLECTION_REPLY), DEFLECTION_REPLY);
    }
}
