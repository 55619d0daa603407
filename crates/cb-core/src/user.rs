//! User data model
//!
//! Users exist to own comments and to drive the admin listing filter.
//! Full account lifecycle (authentication, profiles) is out of scope.

use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user referenced by comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Whether this user is an administrator
    #[serde(default)]
    pub admin: bool,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: impl Into<String>, admin: bool) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            admin,
            created_at: Utc::now(),
        }
    }
}
