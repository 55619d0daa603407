//! Comment data model

use crate::types::{CommentId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment posted by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Comment content
    pub content: String,
    /// Owning user reference
    pub user_id: UserId,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a fresh identifier
    pub fn new(content: impl Into<String>, user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: CommentId::new(),
            content: content.into(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace-style update of the caller-writable fields.
    /// created_at is never touched.
    pub fn apply(&mut self, content: impl Into<String>, user_id: UserId) {
        self.content = content.into();
        self.user_id = user_id;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comment_creation() {
        let user = UserId::new();
        let comment = Comment::new("First!", user);
        assert_eq!(comment.content, "First!");
        assert_eq!(comment.user_id, user);
        assert_eq!(comment.created_at, comment.updated_at);
    }

    #[test]
    fn test_apply_replaces_fields() {
        let mut comment = Comment::new("Original", UserId::new());
        let other_user = UserId::new();
        let created = comment.created_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        comment.apply("Revised", other_user);

        assert_eq!(comment.content, "Revised");
        assert_eq!(comment.user_id, other_user);
        assert_eq!(comment.created_at, created);
        assert!(comment.updated_at > created);
    }

    #[test]
    fn test_comment_serialization() {
        let comment = Comment::new("Round trip", UserId::new());
        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment.id, comment2.id);
        assert_eq!(comment.content, comment2.content);
        assert_eq!(comment.user_id, comment2.user_id);
    }
}
