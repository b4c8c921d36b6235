use thiserror::Error;

/// Top-level error type for the Aegis system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for AegisError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AegisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Memory error: {0}")]
    Memory(String),

    #[error("Conversation error: {0}")]
    Conversation(String),

    #[error("Console error: {0}")]
    Console(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for AegisError {
    fn from(err: toml::de::Error) -> Self {
        AegisError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AegisError {
    fn from(err: toml::ser::Error) -> Self {
        AegisError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Aegis operations.
pub type Result<T> = std::result::Result<T, AegisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AegisError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = AegisError::Validation("name is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: name is empty");

        let err = AegisError::Memory("file locked".to_string());
        assert_eq!(err.to_string(), "Memory error: file locked");

        let err = AegisError::Conversation("turn failed".to_string());
        assert_eq!(err.to_string(), "Conversation error: turn failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AegisError = io_err.into();
        assert!(matches!(err, AegisError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(parsed.is_err());
        let err: AegisError = parsed.unwrap_err().into();
        assert!(matches!(err, AegisError::Config(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = AegisError::Config("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("test debug"));
    }
}
