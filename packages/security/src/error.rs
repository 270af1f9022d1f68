// ABOUTME: Authentication error types
// ABOUTME: Distinguishes unknown accounts, bad or expired credentials, and storage outages

use prdkit_core::ValidationError;
use prdkit_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("No account found for {0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Credential has expired")]
    ExpiredCredential,

    #[error("An account already exists for {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Credential encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => AuthError::Validation(e),
            other => AuthError::Storage(other),
        }
    }
}

impl AuthError {
    /// Whether the failure came from the user store being unreachable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AuthError::Storage(e) if e.is_unavailable())
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_validation_stays_validation() {
        let err: AuthError = StorageError::Validation(ValidationError::MissingField("email")).into();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_unavailable_is_detected_through_storage() {
        let err: AuthError = StorageError::Unavailable("pool closed".to_string()).into();
        assert!(err.is_unavailable());
        assert!(!AuthError::InvalidCredential.is_unavailable());
    }
}
