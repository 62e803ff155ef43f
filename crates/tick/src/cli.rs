//! CLI argument parsing using clap derive macros.

use clap::{Parser, Subcommand};

/// tick - A Rust CLI for the TickTick Open API
#[derive(Parser, Debug)]
#[command(name = "tick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override API access token (default: from env/config)
    #[arg(long, global = true, env = "TICKTICK_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all projects
    #[command(alias = "p")]
    Projects,

    /// Show one project's details
    Project {
        /// Project ID
        project_id: String,
    },

    /// List a project's tasks
    #[command(alias = "t")]
    Tasks {
        /// Project ID
        project_id: String,
    },

    /// Show one task's details
    Task {
        /// Project ID the task belongs to
        project_id: String,

        /// Task ID
        task_id: String,
    },

    /// Filter tasks across projects
    #[command(alias = "f")]
    Filter {
        /// Date window: all, today, tomorrow, overdue, this_week, next_7_days
        #[arg(short, long)]
        date: Option<String>,

        /// Priority level: 0 (None), 1 (Low), 3 (Medium), 5 (High)
        #[arg(short = 'P', long)]
        priority: Option<i64>,

        /// Search text in title, content, and subtask titles
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one project by ID, or "inbox"
        #[arg(short = 'p', long)]
        project: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        // Catches conflicting flags and malformed derive attributes
        Cli::command().debug_assert();
    }

    #[test]
    fn test_filter_flags() {
        let cli = Cli::parse_from([
            "tick", "filter", "--date", "overdue", "-P", "5", "--search", "review",
        ]);
        match cli.command {
            Some(Commands::Filter {
                date,
                priority,
                search,
                project,
            }) => {
                assert_eq!(date.as_deref(), Some("overdue"));
                assert_eq!(priority, Some(5));
                assert_eq!(search.as_deref(), Some("review"));
                assert!(project.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_task_positional_args() {
        let cli = Cli::parse_from(["tick", "task", "p1", "t9"]);
        match cli.command {
            Some(Commands::Task {
                project_id,
                task_id,
            }) => {
                assert_eq!(project_id, "p1");
                assert_eq!(task_id, "t9");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
