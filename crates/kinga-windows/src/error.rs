use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("invalid incident time '{input}': {reason}")]
    InvalidTimeInput { input: String, reason: String },

    #[error("invalid window configuration: {0}")]
    Config(String),

    #[error("no Tokio runtime to run the refresh task: {0}")]
    NoRuntime(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for WindowError {
    fn from(e: serde_json::Error) -> Self {
        WindowError::Serialization(e.to_string())
    }
}
