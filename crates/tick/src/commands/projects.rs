//! Projects command implementations.
//!
//! Lists all projects, or shows one project's details.

use ticktick_api::TickTickClient;
use ticktick_filter::{format_project, render_project_list};

use super::{CommandContext, Result};

/// Executes the projects list command.
pub async fn execute_list(ctx: &CommandContext, token: &str) -> Result<()> {
    let client = TickTickClient::new(token);

    if ctx.verbose {
        eprintln!("Fetching projects...");
    }
    let projects = client.list_projects().await?;

    if !ctx.quiet {
        print!("{}", render_project_list(&projects));
    }
    Ok(())
}

/// Options for the project show command.
#[derive(Debug)]
pub struct ProjectShowOptions {
    /// Project ID.
    pub project_id: String,
}

/// Executes the project show command.
pub async fn execute_show(ctx: &CommandContext, opts: &ProjectShowOptions, token: &str) -> Result<()> {
    let client = TickTickClient::new(token);
    let project = client.get_project(&opts.project_id).await?;

    if !ctx.quiet {
        print!("{}", format_project(&project));
    }
    Ok(())
}
