//! Command implementations for the tick CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod config;
pub mod filter;
pub mod projects;
pub mod show;
pub mod tasks;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// API error.
    #[error("API error: {0}")]
    Api(#[from] ticktick_api::Error),

    /// Filter input validation error.
    #[error("filter error: {0}")]
    Filter(#[from] ticktick_filter::ValidationError),

    /// Filter aggregation error.
    #[error("filter error: {0}")]
    Aggregate(#[from] ticktick_filter::AggregateError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}
