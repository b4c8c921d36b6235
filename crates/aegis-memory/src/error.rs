//! Error types for the memory store.

use aegis_core::AegisError;

/// Errors from memory validation and persistence.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("name may only contain letters and spaces")]
    InvalidName,
    #[error("interest topic cannot be empty")]
    EmptyInterest,
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<MemoryError> for AegisError {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::Persistence(msg) => AegisError::Memory(msg),
            other => AegisError::Validation(other.to_string()),
        }
    }
}
