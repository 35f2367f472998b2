use thiserror::Error;

/// Main error type for the trip-planning session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Planning failure: {0}")]
    Planning(String),

    #[error("Planning timed out after {0}s")]
    Timeout(u64),

    #[error("Unknown interest option: {0}")]
    InvalidInterest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SessionError>;

impl SessionError {
    /// Check if the user can recover from this error by editing and resubmitting
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::Validation(_) => true,
            SessionError::Planning(_) => true,
            SessionError::Timeout(_) => true,
            SessionError::InvalidInterest(_) => true,
            SessionError::Serialization(_) => false,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::Validation(_) => "VALIDATION_ERROR",
            SessionError::Planning(_) => "PLANNING_FAILURE",
            SessionError::Timeout(_) => "TIMEOUT_ERROR",
            SessionError::InvalidInterest(_) => "INVALID_INTEREST_OPTION",
            SessionError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "recoverable": self.is_recoverable()
            }
        })
    }
}
