//! scamlure Engagement Engine
//!
//! The stateful dialogue controller at the heart of the honeypot: per-turn
//! stage tracking, trap-question rotation, bounded prompt construction, the
//! sanitize-then-firewall reply pipeline, and orchestration across
//! independent conversations.

pub mod engagement;
pub mod engine;
pub mod firewall;
pub mod honeypot;
pub mod prompt;
pub mod settings;
pub mod traps;

pub use engagement::{EngagementState, StageCounters};
pub use engine::{FlowOutcome, HoneypotEngine};
pub use firewall::{DEFLECTION_REPLY, FALLBACK_REPLY};
pub use honeypot::HoneypotAgent;
pub use prompt::Strategy;
pub use settings::{EngineConfig, PacingRange};
