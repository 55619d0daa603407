//! File system storage for the board tables

use cb_core::comment::Comment;
use cb_core::error::{BoardError, Result};
use cb_core::store::BoardStore;
use cb_core::types::{CommentId, UserId};
use cb_core::user::User;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Schema version written into table files
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// On-disk envelope for a table
#[derive(Debug, Serialize, Deserialize)]
struct TableFile<T> {
    schema_version: String,
    rows: Vec<T>,
}

impl<T> TableFile<T> {
    fn new(rows: Vec<T>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            rows,
        }
    }
}

/// File system based board storage
///
/// Keeps the comments and users tables as JSON files under a base
/// directory. Every save rewrites the whole table atomically.
pub struct FileStore {
    /// Base directory for table files
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file store rooted at the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let store = Self { base_dir };
        store.ensure_dirs()?;
        Ok(store)
    }

    /// Create a store at the default data location (~/.comment-board)
    pub fn default_location() -> Result<Self> {
        let base_dir = directories::ProjectDirs::from("com", "comment-board", "comment-board")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".comment-board")
            });

        Self::new(base_dir)
    }

    /// Ensure the base directory exists
    fn ensure_dirs(&self) -> Result<()> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).map_err(|e| {
                BoardError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create data directory: {}", e),
                ))
            })?;
            debug!("Created data directory: {:?}", self.base_dir);
        }
        Ok(())
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn comments_path(&self) -> PathBuf {
        self.base_dir.join("comments.json")
    }

    fn users_path(&self) -> PathBuf {
        self.base_dir.join("users.json")
    }

    /// Get a temporary path for atomic writes
    fn temp_path(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("table.json");
        path.with_file_name(format!(".{}.tmp", name))
    }

    /// Read a table file; a missing file is an empty table
    fn load_table<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BoardError::Io(e)),
        };

        let reader = BufReader::new(file);
        let table: TableFile<T> = serde_json::from_reader(reader)?;

        if table.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(BoardError::UnsupportedSchemaVersion(table.schema_version));
        }

        Ok(table.rows)
    }

    /// Write a table atomically (write to temp, then rename)
    fn save_table<T: Serialize>(&self, path: &Path, rows: Vec<T>) -> Result<()> {
        let temp_path = Self::temp_path(path);
        let table = TableFile::new(rows);

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &table)?;
        writer.flush()?;

        fs::rename(&temp_path, path).map_err(|e| {
            // Leave nothing behind on failure
            let _ = fs::remove_file(&temp_path);
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved table {:?}", path);
        Ok(())
    }
}

impl BoardStore for FileStore {
    fn insert_comment(&self, comment: &Comment) -> Result<()> {
        let path = self.comments_path();
        let mut rows: Vec<Comment> = self.load_table(&path)?;

        if rows.iter().any(|c| c.id == comment.id) {
            return Err(BoardError::Validation(format!(
                "Comment with ID {} already exists",
                comment.id
            )));
        }

        rows.push(comment.clone());
        self.save_table(&path, rows)
    }

    fn comment(&self, id: &CommentId) -> Result<Comment> {
        let rows: Vec<Comment> = self.load_table(&self.comments_path())?;
        rows.into_iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| BoardError::CommentNotFound(id.to_string()))
    }

    fn update_comment(&self, comment: &Comment) -> Result<()> {
        let path = self.comments_path();
        let mut rows: Vec<Comment> = self.load_table(&path)?;

        let slot = rows
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or_else(|| BoardError::CommentNotFound(comment.id.to_string()))?;
        *slot = comment.clone();

        self.save_table(&path, rows)
    }

    fn remove_comment(&self, id: &CommentId) -> Result<Comment> {
        let path = self.comments_path();
        let mut rows: Vec<Comment> = self.load_table(&path)?;

        let pos = rows
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| BoardError::CommentNotFound(id.to_string()))?;
        let removed = rows.remove(pos);

        self.save_table(&path, rows)?;
        Ok(removed)
    }

    fn comments(&self) -> Result<Vec<Comment>> {
        self.load_table(&self.comments_path())
    }

    fn comment_exists(&self, id: &CommentId) -> bool {
        self.comment(id).is_ok()
    }

    fn insert_user(&self, user: &User) -> Result<()> {
        let path = self.users_path();
        let mut rows: Vec<User> = self.load_table(&path)?;

        if rows.iter().any(|u| u.id == user.id) {
            return Err(BoardError::Validation(format!(
                "User with ID {} already exists",
                user.id
            )));
        }

        rows.push(user.clone());
        self.save_table(&path, rows)
    }

    fn user(&self, id: &UserId) -> Result<User> {
        let rows: Vec<User> = self.load_table(&self.users_path())?;
        rows.into_iter()
            .find(|u| &u.id == id)
            .ok_or_else(|| BoardError::UserNotFound(id.to_string()))
    }

    fn users(&self) -> Result<Vec<User>> {
        self.load_table(&self.users_path())
    }
}
