//! comment-board - Comment Board CLI
//!
//! A small comment board driven from the terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize in your project
//! comment-board init
//!
//! # Seed a user
//! comment-board user add alice --admin
//!
//! # Post and browse comments
//! comment-board comment create --content "First!" --user <id>
//! comment-board comment list
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
