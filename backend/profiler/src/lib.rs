//! Text analysis over inbound attacker messages.
//!
//! All of this is pure and infallible: ordered keyword rule tables for scam
//! category and attacker style, the static persona registry, and regex-based
//! intelligence extraction. Nothing here touches conversation state.

pub mod intel;
pub mod persona;
pub mod rules;
pub mod scam_type;
pub mod style;

pub use intel::extract_intel;
pub use persona::persona_for;
pub use rules::KeywordRule;
pub use scam_type::classify_scam_type;
pub use style::profile_style;
