use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conversation stage, driven by keyword triggers in the latest inbound
/// message. Never reset within a conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Initial,
    Otp,
    Payment,
    Trust,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Initial => "initial",
            Stage::Otp => "otp",
            Stage::Payment => "payment",
            Stage::Trust => "trust",
        };
        write!(f, "{s}")
    }
}

/// Communication style of the attacker, recomputed fresh on every turn from
/// the latest inbound message only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScammerStyle {
    Aggressive,
    Authority,
    Technical,
    #[default]
    Friendly,
}

impl fmt::Display for ScammerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScammerStyle::Aggressive => "aggressive",
            ScammerStyle::Authority => "authority",
            ScammerStyle::Technical => "technical",
            ScammerStyle::Friendly => "friendly",
        };
        write!(f, "{s}")
    }
}

/// Coarse scam category, used once per conversation to pick a persona.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamCategory {
    Bank,
    Prize,
    Job,
    TechSupport,
    Investment,
    Otp,
    #[default]
    Unknown,
}

/// A fixed fictional victim identity with its behavioral prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub prompt: String,
}

/// What to do with an inbound message, per the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    EngageScammer,
    Ignore,
}

/// Classifier boundary output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub is_scam: bool,
    /// Scam likelihood, capped at 0.95.
    pub confidence: f64,
    pub decision: Decision,
}

/// Attacker intelligence opportunistically extracted from an inbound message.
/// Empty categories are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelFindings {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_handles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numbers: Vec<String>,
}

impl IntelFindings {
    pub fn is_empty(&self) -> bool {
        self.payment_handles.is_empty() && self.links.is_empty() && self.numbers.is_empty()
    }
}

/// One structured record per completed turn, appended to the interaction log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    pub timestamp: DateTime<Utc>,
    pub conversation_id: Uuid,
    pub scammer_message: String,
    pub honeypot_reply: String,
    pub stage: Stage,
    pub score: u32,
    pub frustration_level: u32,
    pub scammer_style: ScammerStyle,
    #[serde(default, skip_serializing_if = "IntelFindings::is_empty")]
    pub intel: IntelFindings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_wire_format() {
        assert_eq!(
            serde_json::to_string(&Decision::EngageScammer).unwrap(),
            "\"ENGAGE_SCAMMER\""
        );
        assert_eq!(serde_json::to_string(&Decision::Ignore).unwrap(), "\"IGNORE\"");
    }

    #[test]
    fn empty_intel_is_omitted() {
        let record = TurnRecord {
            timestamp: Utc::now(),
            conversation_id: Uuid::new_v4(),
            scammer_message: "hello".into(),
            honeypot_reply: "who is this?".into(),
            stage: Stage::Initial,
            score: 1,
            frustration_level: 0,
            scammer_style: ScammerStyle::Friendly,
            intel: IntelFindings::default(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("intel"));
    }

    #[test]
    fn intel_serializes_only_matched_categories() {
        let intel = IntelFindings {
            numbers: vec!["4521".into()],
            ..Default::default()
        };
        let json = serde_json::to_string(&intel).unwrap();
        assert!(json.contains("numbers"));
        assert!(!json.contains("links"));
        assert!(!json.contains("payment_handles"));
    }

    #[test]
    fn record_roundtrip() {
        let record = TurnRecord {
            timestamp: Utc::now(),
            conversation_id: Uuid::new_v4(),
            scammer_message: "share your otp".into(),
            honeypot_reply: "which branch are you calling from?".into(),
            stage: Stage::Otp,
            score: 2,
            frustration_level: 0,
            scammer_style: ScammerStyle::Aggressive,
            intel: IntelFindings::default(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: TurnRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stage, Stage::Otp);
        assert_eq!(back.scammer_style, ScammerStyle::Aggressive);
    }
}
