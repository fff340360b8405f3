//! Telemetry and structured logging for scamlure.
//!
//! Console + rolling NDJSON file tracing setup, and the append-only
//! per-turn interaction log the engagement engine writes through.

pub mod interaction;
pub mod logger;

pub use interaction::NdjsonInteractionLog;
pub use logger::init_logger;
