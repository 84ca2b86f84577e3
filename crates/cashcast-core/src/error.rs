use thiserror::Error;

#[derive(Debug, Error)]
pub enum CashcastError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CashcastError {
    fn from(e: serde_json::Error) -> Self {
        CashcastError::SerializationError(e.to_string())
    }
}
