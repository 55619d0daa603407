//! Core type definitions for comment-board

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new CommentId
    pub fn new() -> Self {
        CommentId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn parse(s: &str) -> crate::Result<Self> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|_| crate::BoardError::Validation(format!("Invalid comment ID: {}", s)))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new UserId
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn parse(s: &str) -> crate::Result<Self> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|_| crate::BoardError::Validation(format!("Invalid user ID: {}", s)))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_uniqueness() {
        let id1 = CommentId::new();
        let id2 = CommentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_comment_id_parse_roundtrip() {
        let id = CommentId::new();
        let parsed = CommentId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_comment_id_parse_invalid() {
        assert!(CommentId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_user_id_parse_roundtrip() {
        let id = UserId::new();
        let parsed = UserId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_parse_invalid() {
        assert!(UserId::parse("42").is_err());
    }
}
