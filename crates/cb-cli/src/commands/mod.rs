//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comment;
pub mod config;
pub mod init;
pub mod user;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub(crate) const CONFIG_PATH: &str = ".comment-board/config.toml";

/// comment-board - Comment Board
#[derive(Debug, Parser)]
#[command(name = "comment-board")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize comment-board in current project
    Init(init::InitArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),

    /// Manage users
    #[command(subcommand)]
    User(user::UserCommand),

    /// Manage comments
    #[command(subcommand)]
    Comment(comment::CommentCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Init(args) => init::execute(args),
        Commands::Config(cmd) => config::execute(cmd, cli.config.as_deref()),
        Commands::User(cmd) => user::execute(cmd, cli.config.as_deref()),
        Commands::Comment(cmd) => comment::execute(cmd, cli.config.as_deref()),
    }
}

/// Load configuration from the given path, the default location, or defaults
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<cb_core::config::Config> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));

    if !path.exists() {
        return Ok(cb_core::config::Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .context(format!("Failed to read config file {}", path.display()))?;
    let config = toml::from_str(&content)
        .context(format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
