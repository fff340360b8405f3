//! Generation gateway adapters.
//!
//! The engagement engine talks to text generation through the
//! `scamlure_core::LlmProvider` trait; this crate ships the concrete
//! adapters (Groq's OpenAI-compatible chat API, plus a mock for tests and
//! offline runs) and a small registry for looking providers up by the name
//! configured at startup.

pub mod providers;

pub use providers::groq::GroqProvider;
pub use providers::mock::MockProvider;
pub use providers::ProviderRegistry;
