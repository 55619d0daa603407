//! Comment command
//!
//! Drives the comment resource actions: list, show, the new/edit forms,
//! create, update, delete. Redirect responses are followed immediately and
//! the flash notice is rendered on the page that follows them.

use anyhow::{Context, Result};
use cb_core::comment::{CommentForm, CommentParams};
use cb_core::flash::FlashSlot;
use cb_core::handler::{CommentsHandler, Location, Response, View};
use cb_core::store::BoardStore;
use cb_core::types::{CommentId, UserId};
use cb_storage::FileStore;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use std::path::Path;
use std::sync::Arc;

/// Comment subcommands
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// List comments from admin users, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a comment
    Show {
        /// Comment ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an empty comment form
    New,

    /// Create a comment
    Create {
        /// Comment content
        #[arg(long, conflicts_with = "data")]
        content: Option<String>,

        /// Owning user ID
        #[arg(long, conflicts_with = "data")]
        user: Option<String>,

        /// Raw JSON payload carrying exactly content and user_id
        #[arg(long)]
        data: Option<String>,
    },

    /// Show a pre-filled edit form
    Edit {
        /// Comment ID
        id: String,
    },

    /// Update a comment
    Update {
        /// Comment ID
        id: String,

        /// Comment content
        #[arg(long, conflicts_with = "data")]
        content: Option<String>,

        /// Owning user ID
        #[arg(long, conflicts_with = "data")]
        user: Option<String>,

        /// Raw JSON payload carrying exactly content and user_id
        #[arg(long)]
        data: Option<String>,
    },

    /// Delete a comment
    Delete {
        /// Comment ID
        id: String,

        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Execute the comment command
pub fn execute(cmd: CommentCommand, config_path: Option<&Path>) -> Result<()> {
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

    let store: Arc<FileStore> = Arc::new(FileStore::new(&config.storage.data_dir)?);
    let handler = CommentsHandler::with_store(store.clone()).with_validator(config.validator());
    let mut flash = FlashSlot::new();

    match cmd {
        CommentCommand::List { json } => {
            let response = handler.index()?;
            follow(&handler, &mut flash, response, json)
        }
        CommentCommand::Show { id, json } => {
            let id = parse_id(&id)?;
            let response = handler.show(&id)?;
            follow(&handler, &mut flash, response, json)
        }
        CommentCommand::New => follow(&handler, &mut flash, handler.new_form(), false),
        CommentCommand::Create {
            content,
            user,
            data,
        } => {
            let params = bind_params(content, user, data)?;
            let response = handler.create(params)?;
            follow(&handler, &mut flash, response, false)
        }
        CommentCommand::Edit { id } => {
            let id = parse_id(&id)?;
            let response = handler.edit_form(&id)?;
            follow(&handler, &mut flash, response, false)
        }
        CommentCommand::Update {
            id,
            content,
            user,
            data,
        } => {
            let id = parse_id(&id)?;
            let params = bind_params(content, user, data)?;
            let response = handler.update(&id, params)?;
            follow(&handler, &mut flash, response, false)
        }
        CommentCommand::Delete { id, yes } => {
            let id = parse_id(&id)?;

            if !yes {
                use dialoguer::Confirm;

                let comment = store.comment(&id)?;
                println!("Comment: {}", id.to_string().green());
                println!("  {}", preview(&comment.content, 60));

                let confirmed = Confirm::new()
                    .with_prompt("Delete this comment?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }

            let response = handler.destroy(&id)?;
            follow(&handler, &mut flash, response, false)
        }
    }
}

fn parse_id(id: &str) -> Result<CommentId> {
    CommentId::parse(id).context(format!("Invalid comment ID: {}", id))
}

/// Build allow-listed params from flags or a raw JSON payload
fn bind_params(
    content: Option<String>,
    user: Option<String>,
    data: Option<String>,
) -> Result<CommentParams> {
    if let Some(payload) = data {
        return CommentParams::from_json(&payload).context("Rejected comment payload");
    }

    let user_id = user
        .map(|s| UserId::parse(&s).context(format!("Invalid user ID: {}", s)))
        .transpose()?;
    Ok(CommentParams::new(content, user_id))
}

/// Render a response, following redirects and consuming the flash notice
fn follow(
    handler: &CommentsHandler,
    flash: &mut FlashSlot,
    response: Response,
    as_json: bool,
) -> Result<()> {
    match response {
        Response::Redirect { to, notice } => {
            if let Some(notice) = notice {
                flash.set(notice);
            }
            let next = match to {
                Location::CommentsIndex => handler.index()?,
                Location::Comment(id) => handler.show(&id)?,
            };
            follow(handler, flash, next, as_json)
        }
        Response::Render(view) => render_view(view, flash.take(), as_json),
    }
}

fn render_view(view: View, notice: Option<String>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    if let Some(notice) = notice {
        println!("{}", notice.green());
        println!();
    }

    match view {
        View::Index { comments } => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&comments)?);
                return Ok(());
            }

            if comments.is_empty() {
                println!("No comments found.");
                return Ok(());
            }

            println!("{}", "Comments:".bold().underline());
            println!();

            for comment in &comments {
                println!(
                    "  {} {} ({})",
                    comment.id.to_string().green(),
                    preview(&comment.content, 60),
                    age_str(comment.created_at).dimmed()
                );
                println!("    by {}", comment.user_id.to_string().cyan());
            }
        }
        View::Show { comment } => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&comment)?);
                return Ok(());
            }

            println!("{}", "Comment".bold().underline());
            println!();
            println!("  ID: {}", comment.id.to_string().green());
            println!("  User: {}", comment.user_id.to_string().cyan());
            println!(
                "  Created: {}",
                comment.created_at.format("%Y-%m-%d %H:%M:%S")
            );
            println!(
                "  Updated: {}",
                comment.updated_at.format("%Y-%m-%d %H:%M:%S")
            );
            println!();
            println!("{}", comment.content);
        }
        View::New { form } => render_form("New Comment", None, &form),
        View::Edit { id, form } => render_form("Edit Comment", Some(id), &form),
    }

    Ok(())
}

fn render_form(title: &str, id: Option<CommentId>, form: &CommentForm) {
    use colored::Colorize;

    println!("{}", title.bold().underline());
    println!();
    if let Some(id) = id {
        println!("  ID: {}", id.to_string().green());
    }

    let content = if form.content.is_empty() {
        "<blank>".dimmed().to_string()
    } else {
        form.content.clone()
    };
    let user = form
        .user_id
        .map(|u| u.to_string().cyan().to_string())
        .unwrap_or_else(|| "<blank>".dimmed().to_string());

    println!("  content: {}", content);
    println!("  user_id: {}", user);

    if !form.errors.is_empty() {
        println!();
        println!("{}", "Errors:".red().bold());
        for message in form.errors.full_messages() {
            println!("  {} {}", "✗".red(), message);
        }
    }
}

fn preview(content: &str, max: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

fn age_str(created_at: DateTime<Utc>) -> String {
    let age = Utc::now().signed_duration_since(created_at).num_hours();
    if age < 1 {
        "just now".to_string()
    } else if age < 24 {
        format!("{}h ago", age)
    } else {
        format!("{}d ago", age / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_command_construction() {
        let _cmd = CommentCommand::List { json: false };
        let _cmd = CommentCommand::Delete {
            id: "test".to_string(),
            yes: true,
        };
    }

    #[test]
    fn test_bind_params_from_flags() {
        let user = UserId::new();
        let params = bind_params(
            Some("Hi".to_string()),
            Some(user.to_string()),
            None,
        )
        .unwrap();
        assert_eq!(params.content.as_deref(), Some("Hi"));
        assert_eq!(params.user_id, Some(user));
    }

    #[test]
    fn test_bind_params_rejects_unknown_payload_field() {
        let payload = r#"{"content": "Hi", "admin": true}"#;
        assert!(bind_params(None, None, Some(payload.to_string())).is_err());
    }

    #[test]
    fn test_bind_params_rejects_bad_user_id() {
        assert!(bind_params(Some("Hi".to_string()), Some("nope".to_string()), None).is_err());
    }

    #[test]
    fn test_preview_truncates_long_content() {
        assert_eq!(preview("short", 60), "short");
        let long = "x".repeat(80);
        let shown = preview(&long, 60);
        assert!(shown.ends_with('…'));
        assert_eq!(shown.chars().count(), 61);
    }
}
