//! In-memory form state for new/edit rendering
//!
//! A form is the unpersisted side of a comment: the values the caller
//! submitted (or the record's current values, for edit), plus any field
//! errors from a rejected save.

use super::model::Comment;
use super::params::CommentParams;
use super::validator::FieldErrors;
use crate::types::UserId;
use serde::Serialize;

/// Form state for the new/edit views
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentForm {
    /// Content as it should appear in the input field
    pub content: String,
    /// Selected owning user, if any
    pub user_id: Option<UserId>,
    /// Field errors from a rejected save
    pub errors: FieldErrors,
}

impl CommentForm {
    /// An empty form for the new view
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing record
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            content: comment.content.clone(),
            user_id: Some(comment.user_id),
            errors: FieldErrors::new(),
        }
    }

    /// A form carrying rejected input and its errors, preserving what the
    /// caller typed
    pub fn rejected(params: &CommentParams, errors: FieldErrors) -> Self {
        Self {
            content: params.content.clone().unwrap_or_default(),
            user_id: params.user_id,
            errors,
        }
    }
}
