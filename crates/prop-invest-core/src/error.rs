use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropInvestError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PropInvestError {
    fn from(e: serde_json::Error) -> Self {
        PropInvestError::SerializationError(e.to_string())
    }
}
