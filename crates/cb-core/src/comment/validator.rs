//! Comment validation

use super::params::CommentParams;
use crate::types::UserId;
use serde::Serialize;

/// Maximum comment length (default)
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Field-level validation errors attached to a rejected form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

/// A single field error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Field the error applies to
    pub field: String,
    /// Error message, phrased to follow the field name
    pub message: String,
}

impl FieldErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Check whether any errors were recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate the recorded errors
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Full messages, e.g. "content can't be blank"
    pub fn full_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("{} {}", e.field, e.message))
            .collect()
    }

    /// Check whether a particular field has errors
    pub fn on(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Validated comment fields, ready to be written to a record
#[derive(Debug, Clone)]
pub struct ValidComment {
    pub content: String,
    pub user_id: UserId,
}

/// Validator for caller-supplied comment fields
pub struct CommentValidator {
    max_content_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            max_content_length: MAX_CONTENT_LENGTH,
        }
    }

    /// Create a new validator with a custom max content length
    pub fn with_max_length(max_content_length: usize) -> Self {
        Self { max_content_length }
    }

    /// Check params, returning the validated fields or the field errors
    /// that should be re-rendered on the form.
    ///
    /// user_id is checked for presence only; whether it refers to an
    /// existing or admin user is deliberately not checked here.
    pub fn check(&self, params: &CommentParams) -> Result<ValidComment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let content = params.content.clone().unwrap_or_default();
        if content.trim().is_empty() {
            errors.add("content", "can't be blank");
        } else if content.len() > self.max_content_length {
            errors.add(
                "content",
                format!(
                    "is too long (maximum is {} characters)",
                    self.max_content_length
                ),
            );
        }

        if params.user_id.is_none() {
            errors.add("user_id", "can't be blank");
        }

        match (errors.is_empty(), params.user_id) {
            (true, Some(user_id)) => Ok(ValidComment { content, user_id }),
            _ => Err(errors),
        }
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
