//! Allow-listed comment input
//!
//! Caller-supplied comment fields are bound through [`CommentParams`], which
//! permits exactly `content` and `user_id`. Any other key fails
//! deserialization, so unpermitted fields can never reach a stored record.

use crate::error::{BoardError, Result};
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// The caller-writable fields of a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommentParams {
    /// Comment content
    pub content: Option<String>,
    /// Owning user reference
    pub user_id: Option<UserId>,
}

impl CommentParams {
    /// Create params from already-separated fields
    pub fn new(content: Option<String>, user_id: Option<UserId>) -> Self {
        Self { content, user_id }
    }

    /// Bind params from a raw JSON payload, rejecting unknown fields
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| {
            BoardError::Validation(format!("Invalid comment payload: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bind_both_fields() {
        let user = UserId::new();
        let payload = format!(r#"{{"content": "Hi", "user_id": "{}"}}"#, user);
        let params = CommentParams::from_json(&payload).unwrap();
        assert_eq!(params.content.as_deref(), Some("Hi"));
        assert_eq!(params.user_id, Some(user));
    }

    #[test]
    fn test_missing_fields_bind_as_absent() {
        let params = CommentParams::from_json("{}").unwrap();
        assert!(params.content.is_none());
        assert!(params.user_id.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let payload = r#"{"content": "Hi", "id": "11111111-2222-3333-4444-555555555555"}"#;
        let err = CommentParams::from_json(payload).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_timestamp_override_rejected() {
        let payload = r#"{"content": "Hi", "created_at": "1970-01-01T00:00:00Z"}"#;
        assert!(CommentParams::from_json(payload).is_err());
    }

    #[test]
    fn test_malformed_user_id_rejected() {
        let payload = r#"{"content": "Hi", "user_id": "not-a-uuid"}"#;
        assert!(CommentParams::from_json(payload).is_err());
    }
}
