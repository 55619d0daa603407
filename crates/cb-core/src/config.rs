//! Configuration management for comment-board

use crate::comment::CommentValidator;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage settings
    pub storage: StorageConfig,
    /// Comment settings
    pub comments: CommentsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            comments: CommentsConfig::default(),
        }
    }
}

impl Config {
    /// Build a validator from the configured limits
    pub fn validator(&self) -> CommentValidator {
        CommentValidator::with_max_length(self.comments.max_content_length)
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the table files
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".comment-board"),
        }
    }
}

/// Comment-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// Maximum comment content length
    pub max_content_length: usize,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            max_content_length: 2000,
        }
    }
}
