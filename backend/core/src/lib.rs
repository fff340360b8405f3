pub mod error;
pub mod traits;
pub mod types;

pub use error::ScamLureError;
pub use traits::{FraudClassifier, InteractionSink, LlmProvider, LlmRequest, LlmResponse};
pub use types::{
    Decision, IntelFindings, Persona, ScamCategory, ScammerStyle, Stage, TurnRecord, Verdict,
};
