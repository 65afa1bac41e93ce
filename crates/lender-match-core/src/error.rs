use thiserror::Error;

#[derive(Debug, Error)]
pub enum LenderMatchError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl LenderMatchError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LenderMatchError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for LenderMatchError {
    fn from(e: serde_json::Error) -> Self {
        LenderMatchError::SerializationError(e.to_string())
    }
}
