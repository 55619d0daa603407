//! Config command
//!
//! Manage comment-board configuration.

use anyhow::Result;
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(super::CONFIG_PATH));

    match cmd {
        ConfigCommand::Show { json } => show_config(&path, json),
        ConfigCommand::Validate => validate_config(&path),
    }
}

fn show_config(path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    if !path.exists() {
        eprintln!(
            "{} Configuration not found. Run '{}' to create.",
            "⚠".yellow(),
            "comment-board init".cyan()
        );
        return Ok(());
    }

    let content = fs::read_to_string(path)?;

    if as_json {
        let config: toml::Value = toml::from_str(&content)?;
        let json = serde_json::to_string_pretty(&config)?;
        println!("{}", json);
    } else {
        println!("{}", "Configuration:".bold().underline());
        println!("{}", path.display().to_string().dimmed());
        println!();
        println!("{}", content);
    }

    Ok(())
}

fn validate_config(path: &Path) -> Result<()> {
    use colored::Colorize;

    if !path.exists() {
        eprintln!("{} Configuration not found at {}", "✗".red(), path.display());
        return Ok(());
    }

    let content = fs::read_to_string(path)?;

    match toml::from_str::<cb_core::config::Config>(&content) {
        Ok(config) => {
            println!("{} Configuration is valid", "✓".green());
            println!(
                "  data_dir: {}",
                config.storage.data_dir.display().to_string().cyan()
            );
            println!(
                "  max_content_length: {}",
                config.comments.max_content_length.to_string().cyan()
            );
        }
        Err(e) => {
            eprintln!("{} Invalid configuration: {}", "✗".red(), e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_default_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[comments]\nmax_content_length = 500\n").unwrap();

        validate_config(&path).unwrap();
    }

    #[test]
    fn test_show_missing_config_is_ok() {
        let temp = tempfile::tempdir().unwrap();
        show_config(&temp.path().join("nope.toml"), false).unwrap();
    }
}
