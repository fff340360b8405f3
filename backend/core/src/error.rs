use thiserror::Error;

/// Top-level error type for the scamlure runtime.
#[derive(Debug, Error)]
pub enum ScamLureError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("LLM provider error ({provider}): {message}")]
    Llm { provider: String, message: String },

    #[error("unknown LLM provider: {0}")]
    UnknownProvider(String),

    #[error("interaction log write failed: {0}")]
    LogWrite(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
