//! Error types for comment-board

use thiserror::Error;

/// Main error type for comment-board
#[derive(Debug, Error)]
pub enum BoardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BoardError>,
    },
}

impl BoardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BoardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check whether this error is a missing-record lookup
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BoardError::CommentNotFound(_) | BoardError::UserNotFound(_)
        )
    }
}

/// Result type alias for comment-board
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::CommentNotFound("test-123".to_string());
        assert_eq!(err.to_string(), "Comment not found: test-123");
    }

    #[test]
    fn test_error_with_context() {
        let err = BoardError::Validation("content can't be blank".to_string());
        let err = err.with_context("Failed to create comment");
        assert!(err.to_string().contains("Failed to create comment"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
    }

    #[test]
    fn test_is_not_found() {
        assert!(BoardError::CommentNotFound("x".into()).is_not_found());
        assert!(BoardError::UserNotFound("x".into()).is_not_found());
        assert!(!BoardError::Validation("x".into()).is_not_found());
    }
}
