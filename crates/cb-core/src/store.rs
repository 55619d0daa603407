//! Board storage trait and abstractions

use crate::comment::Comment;
use crate::error::Result;
use crate::types::{CommentId, UserId};
use crate::user::User;
use std::collections::HashSet;

/// Trait for board storage implementations
///
/// Backends persist two tables, comments and users. Lookup misses surface
/// as [`crate::BoardError::CommentNotFound`] / [`crate::BoardError::UserNotFound`].
pub trait BoardStore: Send + Sync {
    /// Insert a new comment; the id must not already exist
    fn insert_comment(&self, comment: &Comment) -> Result<()>;

    /// Fetch a comment by id
    fn comment(&self, id: &CommentId) -> Result<Comment>;

    /// Overwrite an existing comment record
    fn update_comment(&self, comment: &Comment) -> Result<()>;

    /// Delete a comment, returning the removed record
    fn remove_comment(&self, id: &CommentId) -> Result<Comment>;

    /// All comments, in storage order
    fn comments(&self) -> Result<Vec<Comment>>;

    /// Check if a comment exists
    fn comment_exists(&self, id: &CommentId) -> bool;

    /// Insert a new user; the id must not already exist
    fn insert_user(&self, user: &User) -> Result<()>;

    /// Fetch a user by id
    fn user(&self, id: &UserId) -> Result<User>;

    /// All users, in storage order
    fn users(&self) -> Result<Vec<User>>;

    /// Comments authored by admin users, newest first.
    ///
    /// Contract: a comment is listed iff its owning user exists in the
    /// users table and has `admin = true`; comments owned by unknown users
    /// are skipped. Ordering is created_at descending.
    fn admin_authored(&self) -> Result<Vec<Comment>> {
        let admins: HashSet<UserId> = self
            .users()?
            .into_iter()
            .filter(|u| u.admin)
            .map(|u| u.id)
            .collect();

        let mut listed: Vec<Comment> = self
            .comments()?
            .into_iter()
            .filter(|c| admins.contains(&c.user_id))
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use pretty_assertions::assert_eq;

    fn seed_user(store: &MemoryStore, admin: bool) -> User {
        let user = User::new(if admin { "admin" } else { "member" }, admin);
        store.insert_user(&user).unwrap();
        user
    }

    fn seed_comment(store: &MemoryStore, content: &str, user_id: UserId) -> Comment {
        let comment = Comment::new(content, user_id);
        store.insert_comment(&comment).unwrap();
        // Spread creation timestamps so ordering is observable
        std::thread::sleep(std::time::Duration::from_millis(5));
        comment
    }

    #[test]
    fn test_insert_and_fetch_comment() {
        let store = MemoryStore::new();
        let comment = Comment::new("Hello", UserId::new());

        store.insert_comment(&comment).unwrap();

        assert!(store.comment_exists(&comment.id));
        assert_eq!(store.comment(&comment.id).unwrap().content, "Hello");
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let store = MemoryStore::new();
        let comment = Comment::new("Hello", UserId::new());

        store.insert_comment(&comment).unwrap();
        assert!(store.insert_comment(&comment).is_err());
    }

    #[test]
    fn test_fetch_missing_comment() {
        let store = MemoryStore::new();
        let result = store.comment(&CommentId::new());
        assert!(matches!(
            result,
            Err(crate::BoardError::CommentNotFound(_))
        ));
    }

    #[test]
    fn test_update_missing_comment_fails() {
        let store = MemoryStore::new();
        let comment = Comment::new("Never stored", UserId::new());
        assert!(store.update_comment(&comment).is_err());
    }

    #[test]
    fn test_remove_comment() {
        let store = MemoryStore::new();
        let comment = Comment::new("Gone soon", UserId::new());
        store.insert_comment(&comment).unwrap();

        let removed = store.remove_comment(&comment.id).unwrap();
        assert_eq!(removed.id, comment.id);
        assert!(!store.comment_exists(&comment.id));

        // Second remove of the same id is a miss, not a silent success
        assert!(store.remove_comment(&comment.id).is_err());
    }

    #[test]
    fn test_user_lookup() {
        let store = MemoryStore::new();
        let user = seed_user(&store, true);

        assert_eq!(store.user(&user.id).unwrap().name, "admin");
        assert!(store.user(&UserId::new()).is_err());
    }

    #[test]
    fn test_admin_authored_filters_non_admins() {
        let store = MemoryStore::new();
        let admin = seed_user(&store, true);
        let member = seed_user(&store, false);

        let kept = seed_comment(&store, "by admin", admin.id);
        seed_comment(&store, "by member", member.id);
        seed_comment(&store, "by nobody", UserId::new());

        let listed = store.admin_authored().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, kept.id);
    }

    #[test]
    fn test_admin_authored_newest_first() {
        let store = MemoryStore::new();
        let admin = seed_user(&store, true);

        let older = seed_comment(&store, "older", admin.id);
        let newer = seed_comment(&store, "newer", admin.id);

        let listed = store.admin_authored().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);
        assert!(listed[0].created_at > listed[1].created_at);
    }
}
