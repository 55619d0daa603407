//! Comment domain module
//!
//! Holds the comment record, the allow-listed input params, validation,
//! and the in-memory form state for rendering.

pub mod form;
pub mod model;
pub mod params;
pub mod validator;

pub use form::CommentForm;
pub use model::Comment;
pub use params::CommentParams;
pub use validator::{CommentValidator, FieldErrors, ValidComment};
