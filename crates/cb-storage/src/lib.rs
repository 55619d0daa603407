//! cb-storage - Storage library for comment-board
//!
//! This crate provides the file-backed implementation of the board store.

mod file_store;

pub use file_store::{FileStore, CURRENT_SCHEMA_VERSION};
