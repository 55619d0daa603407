//! Init command
//!
//! Initialize comment-board data and configuration in a project.

use anyhow::{Context, Result};
use cb_core::store::BoardStore;
use cb_core::user::User;
use cb_storage::FileStore;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(long)]
    pub force: bool,

    /// Directory to initialize (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Seed an initial admin user with this name
    #[arg(long)]
    pub admin: Option<String>,
}

/// Execute the init command
pub fn execute(args: InitArgs) -> Result<()> {
    use colored::Colorize;

    let project_dir = args
        .path
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    println!(
        "Initializing comment-board in {}...",
        project_dir.display()
    );

    // Check if already initialized
    let board_dir = project_dir.join(".comment-board");
    if board_dir.join("config.toml").exists() && !args.force {
        eprintln!(
            "{} comment-board already initialized. Use --force to reinitialize.",
            "⚠".yellow()
        );
        return Ok(());
    }

    fs::create_dir_all(&board_dir).context("Failed to create .comment-board/ directory")?;
    println!("{} Created .comment-board/ directory", "✓".green());

    let config_path = board_dir.join("config.toml");
    fs::write(&config_path, default_config()).context("Failed to write config.toml")?;
    println!("{} Generated config.toml", "✓".green());

    if let Some(name) = &args.admin {
        let store = FileStore::new(&board_dir)?;
        let admin = User::new(name, true);
        store.insert_user(&admin)?;
        println!("{} Seeded admin user '{}' ({})", "✓".green(), name, admin.id);
    }

    println!("\n{}", "Next steps:".bold());
    println!("  1. Review and customize .comment-board/config.toml");
    println!("  2. Add a user:");
    println!("     ");
    println!("     {}", "comment-board user add alice --admin".cyan());
    println!("     ");
    println!("  3. Post your first comment:");
    println!("     ");
    println!(
        "     {}",
        "comment-board comment create --content \"First!\" --user <id>".cyan()
    );

    Ok(())
}

fn default_config() -> &'static str {
    r#"# comment-board configuration

[storage]
# Directory holding the comments and users tables
data_dir = ".comment-board"

[comments]
# Maximum comment content length
max_content_length = 2000
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_toml() {
        let config: cb_core::config::Config = toml::from_str(default_config()).unwrap();
        assert_eq!(config.comments.max_content_length, 2000);
    }

    #[test]
    fn test_init_creates_config() {
        let temp = tempfile::tempdir().unwrap();
        let args = InitArgs {
            force: false,
            path: Some(temp.path().to_path_buf()),
            admin: None,
        };

        execute(args).unwrap();
        assert!(temp.path().join(".comment-board/config.toml").exists());
    }

    #[test]
    fn test_init_seeds_admin() {
        let temp = tempfile::tempdir().unwrap();
        let args = InitArgs {
            force: false,
            path: Some(temp.path().to_path_buf()),
            admin: Some("alice".to_string()),
        };

        execute(args).unwrap();

        let store = FileStore::new(temp.path().join(".comment-board")).unwrap();
        let users = store.users().unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].admin);
    }
}
