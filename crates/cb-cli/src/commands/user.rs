//! User command
//!
//! Seed and list the users referenced by comments.

use anyhow::Result;
use cb_core::store::BoardStore;
use cb_core::user::User;
use cb_storage::FileStore;
use clap::Subcommand;
use std::path::Path;

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Add a user
    Add {
        /// Display name
        name: String,

        /// Mark the user as an administrator
        #[arg(long)]
        admin: bool,
    },

    /// List all users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the user command
pub fn execute(cmd: UserCommand, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let config = super::load_config(config_path)?;

    if !config.storage.data_dir.exists() {
        eprintln!(
            "{} No data directory found. Run '{}' first.",
            "⚠".yellow(),
            "comment-board init".cyan()
        );
        return Ok(());
    }

    let store = FileStore::new(&config.storage.data_dir)?;

    match cmd {
        UserCommand::Add { name, admin } => add_user(&store, &name, admin),
        UserCommand::List { json } => list_users(&store, json),
    }
}

fn add_user(store: &FileStore, name: &str, admin: bool) -> Result<()> {
    use colored::Colorize;

    let user = User::new(name, admin);
    store.insert_user(&user)?;

    let role = if admin { " (admin)" } else { "" };
    println!("{} Added user '{}'{}", "✓".green(), name, role);
    println!("  {}", user.id.to_string().green());

    Ok(())
}

fn list_users(store: &FileStore, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let users = store.users()?;

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    if as_json {
        let json = serde_json::to_string_pretty(&users)?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", "Users:".bold().underline());
    println!();

    for user in &users {
        let badge = if user.admin {
            "admin".yellow().to_string()
        } else {
            "member".dimmed().to_string()
        };
        println!("  {} {} ({})", user.id.to_string().green(), user.name, badge);
    }

    Ok(())
}
