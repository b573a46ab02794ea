use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for InsightError {
    fn from(e: serde_json::Error) -> Self {
        InsightError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for InsightError {
    fn from(e: std::io::Error) -> Self {
        InsightError::Store(e.to_string())
    }
}
