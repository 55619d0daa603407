//! Comment resource handler
//!
//! Maps the six CRUD-style actions onto store operations and selects a
//! response: render a view, or redirect with an optional flash notice.
//! Lookup misses propagate as errors for the caller to surface; validation
//! failures are recovered locally by re-rendering the form.

use crate::comment::{Comment, CommentForm, CommentParams, CommentValidator};
use crate::error::Result;
use crate::store::BoardStore;
use crate::types::CommentId;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Notice attached after a successful create
pub const CREATED_NOTICE: &str = "Successfully created comment.";
/// Notice attached after a successful update
pub const UPDATED_NOTICE: &str = "Successfully updated comment.";
/// Notice attached after a successful destroy
pub const DESTROYED_NOTICE: &str = "Successfully destroyed comment.";

/// A view selected for rendering
#[derive(Debug, Clone, Serialize)]
pub enum View {
    /// Admin-authored comments, newest first
    Index { comments: Vec<Comment> },
    /// One comment's detail page
    Show { comment: Comment },
    /// Input form for a new comment
    New { form: CommentForm },
    /// Pre-filled form for an existing comment
    Edit { id: CommentId, form: CommentForm },
}

/// Redirect target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    /// The comment listing
    CommentsIndex,
    /// A comment's detail page
    Comment(CommentId),
}

/// Selected response for an action
#[derive(Debug, Clone, Serialize)]
pub enum Response {
    /// Render a view directly
    Render(View),
    /// Redirect the caller, optionally carrying a one-shot notice
    Redirect {
        to: Location,
        notice: Option<String>,
    },
}

impl Response {
    fn redirect(to: Location, notice: &str) -> Self {
        Response::Redirect {
            to,
            notice: Some(notice.to_string()),
        }
    }

    /// Check whether this response is a redirect
    pub fn is_redirect(&self) -> bool {
        matches!(self, Response::Redirect { .. })
    }
}

/// Handler mapping comment resource actions to store operations
pub struct CommentsHandler {
    store: Arc<dyn BoardStore>,
    validator: CommentValidator,
}

impl CommentsHandler {
    /// Create a handler over the given store
    pub fn new(store: impl BoardStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            validator: CommentValidator::new(),
        }
    }

    /// Create a handler over shared storage
    pub fn with_store(store: Arc<dyn BoardStore>) -> Self {
        Self {
            store,
            validator: CommentValidator::new(),
        }
    }

    /// Replace the validator (e.g. configured content length)
    pub fn with_validator(mut self, validator: CommentValidator) -> Self {
        self.validator = validator;
        self
    }

    /// List comments authored by admin users, newest first
    pub fn index(&self) -> Result<Response> {
        let comments = self.store.admin_authored()?;
        Ok(Response::Render(View::Index { comments }))
    }

    /// Fetch one comment for display
    pub fn show(&self, id: &CommentId) -> Result<Response> {
        let comment = self.store.comment(id)?;
        Ok(Response::Render(View::Show { comment }))
    }

    /// Produce an empty form for input rendering
    pub fn new_form(&self) -> Response {
        Response::Render(View::New {
            form: CommentForm::empty(),
        })
    }

    /// Persist a new comment from allow-listed input
    pub fn create(&self, params: CommentParams) -> Result<Response> {
        match self.validator.check(&params) {
            Ok(valid) => {
                let comment = Comment::new(valid.content, valid.user_id);
                self.store.insert_comment(&comment)?;
                debug!("Created comment {}", comment.id);
                Ok(Response::redirect(Location::Comment(comment.id), CREATED_NOTICE))
            }
            Err(errors) => Ok(Response::Render(View::New {
                form: CommentForm::rejected(&params, errors),
            })),
        }
    }

    /// Fetch one comment for form pre-filling
    pub fn edit_form(&self, id: &CommentId) -> Result<Response> {
        let comment = self.store.comment(id)?;
        Ok(Response::Render(View::Edit {
            id: comment.id,
            form: CommentForm::from_comment(&comment),
        }))
    }

    /// Apply a full replace-style update from allow-listed input
    pub fn update(&self, id: &CommentId, params: CommentParams) -> Result<Response> {
        let mut comment = self.store.comment(id)?;
        match self.validator.check(&params) {
            Ok(valid) => {
                comment.apply(valid.content, valid.user_id);
                self.store.update_comment(&comment)?;
                debug!("Updated comment {}", comment.id);
                Ok(Response::redirect(Location::Comment(comment.id), UPDATED_NOTICE))
            }
            Err(errors) => Ok(Response::Render(View::Edit {
                id: comment.id,
                form: CommentForm::rejected(&params, errors),
            })),
        }
    }

    /// Delete a comment unconditionally
    pub fn destroy(&self, id: &CommentId) -> Result<Response> {
        let removed = self.store.remove_comment(id)?;
        debug!("Destroyed comment {}", removed.id);
        Ok(Response::redirect(Location::CommentsIndex, DESTROYED_NOTICE))
    }
}
