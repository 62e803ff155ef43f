use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use ticktick_filter::AggregateError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.no_color {
                eprintln!("Error: {e}");
            } else {
                eprintln!("{} {e}", "Error:".red());
            }
            error_exit_code(&e)
        }
    }
}

/// Initializes stderr logging; `RUST_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    // Config and help need no token
    match &cli.command {
        Some(Commands::Config { command }) => {
            return match command {
                Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
                Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
            };
        }
        None => {
            if !ctx.quiet {
                println!("tick - TickTick CLI");
                println!("Use --help for usage information");
            }
            return Ok(());
        }
        _ => {}
    }

    let token = resolve_token(cli)?;

    let Some(command) = &cli.command else {
        return Ok(());
    };
    match command {
        Commands::Projects => commands::projects::execute_list(&ctx, &token).await,
        Commands::Project { project_id } => {
            let opts = commands::projects::ProjectShowOptions {
                project_id: project_id.clone(),
            };
            commands::projects::execute_show(&ctx, &opts, &token).await
        }
        Commands::Tasks { project_id } => {
            let opts = commands::tasks::TasksListOptions {
                project_id: project_id.clone(),
            };
            commands::tasks::execute(&ctx, &opts, &token).await
        }
        Commands::Task {
            project_id,
            task_id,
        } => {
            let opts = commands::show::TaskShowOptions {
                project_id: project_id.clone(),
                task_id: task_id.clone(),
            };
            commands::show::execute(&ctx, &opts, &token).await
        }
        Commands::Filter {
            date,
            priority,
            search,
            project,
        } => {
            let opts = commands::filter::FilterOptions {
                date: date.clone(),
                priority: *priority,
                search: search.clone(),
                project: project.clone(),
            };
            commands::filter::execute(&ctx, &opts, &token).await
        }
        Commands::Config { .. } => unreachable!("handled above"),
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Filter(_) => ExitCode::from(1),
        CommandError::Aggregate(AggregateError::ProjectNotFound(_)) => ExitCode::from(1),
        CommandError::Aggregate(AggregateError::Source(_)) => ExitCode::from(2),
        CommandError::Api(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

/// Resolves the API access token with priority: flag > env > config file.
///
/// The resolution order is:
/// 1. `--token` command line flag (clap also fills this from
///    `TICKTICK_ACCESS_TOKEN`)
/// 2. Token from config file (`~/.config/tick/config.toml`)
fn resolve_token(cli: &Cli) -> commands::Result<String> {
    if let Some(token) = &cli.token {
        tracing::debug!("using token from flag or environment");
        return Ok(token.clone());
    }

    if let Ok(config) = load_config() {
        if let Some(token) = config.token {
            tracing::debug!("using token from config file");
            return Ok(token);
        }
    }

    Err(CommandError::Config(
        "No API token found. Set TICKTICK_ACCESS_TOKEN or add `token` to the config file."
            .to_string(),
    ))
}
