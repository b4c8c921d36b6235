//! Error types for the conversation engine.

use aegis_core::AegisError;
use aegis_memory::MemoryError;

/// Errors from the conversation engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message exceeds maximum length of {0} characters")]
    InputTooLong(usize),
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("memory error: {0}")]
    Memory(String),
}

impl From<MemoryError> for ChatError {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::EmptyName | MemoryError::InvalidName => {
                ChatError::InvalidName(err.to_string())
            }
            other => ChatError::Memory(other.to_string()),
        }
    }
}

impl From<ChatError> for AegisError {
    fn from(err: ChatError) -> Self {
        AegisError::Conversation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::InputTooLong(500);
        assert_eq!(
            err.to_string(),
            "message exceeds maximum length of 500 characters"
        );

        let err = ChatError::InvalidName("name cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid name: name cannot be empty");

        let err = ChatError::Memory("disk full".to_string());
        assert_eq!(err.to_string(), "memory error: disk full");
    }

    #[test]
    fn test_name_errors_map_to_invalid_name() {
        let err: ChatError = MemoryError::EmptyName.into();
        assert!(matches!(err, ChatError::InvalidName(_)));

        let err: ChatError = MemoryError::InvalidName.into();
        assert!(matches!(err, ChatError::InvalidName(_)));
    }

    #[test]
    fn test_persistence_error_maps_to_memory() {
        let err: ChatError = MemoryError::Persistence("write failed".to_string()).into();
        assert!(matches!(err, ChatError::Memory(_)));
    }

    #[test]
    fn test_chat_error_converts_to_conversation() {
        let err: AegisError = ChatError::InputTooLong(100).into();
        assert!(matches!(err, AegisError::Conversation(_)));
        assert!(err.to_string().contains("100"));
    }
}
