//! Tasks command implementation.
//!
//! Lists one project's tasks in fetch order. The `inbox` keyword is resolved
//! by name against the project list, since the inbox's real id is opaque.

use ticktick_api::{ApiError, TickTickClient, INBOX_KEYWORD};
use ticktick_filter::render_project_tasks;

use super::{CommandContext, Result};

/// Options for the tasks list command.
#[derive(Debug)]
pub struct TasksListOptions {
    /// Project ID, or the `inbox` keyword.
    pub project_id: String,
}

/// Executes the tasks list command.
pub async fn execute(ctx: &CommandContext, opts: &TasksListOptions, token: &str) -> Result<()> {
    let client = TickTickClient::new(token);
    let project_id = resolve_project_id(&client, &opts.project_id).await?;

    if ctx.verbose {
        eprintln!("Fetching tasks for project {project_id}...");
    }
    let data = client.get_project_data(&project_id).await?;

    if !ctx.quiet {
        println!("{}", render_project_tasks(&data.project.name, &data.tasks));
    }
    Ok(())
}

/// Resolves the `inbox` keyword to its project id; anything else passes
/// through unchanged.
async fn resolve_project_id(client: &TickTickClient, requested: &str) -> Result<String> {
    if !requested.eq_ignore_ascii_case(INBOX_KEYWORD) {
        return Ok(requested.to_string());
    }

    let projects = client.list_projects().await?;
    projects
        .into_iter()
        .find(|p| p.is_inbox())
        .map(|p| p.id)
        .ok_or_else(|| {
            ticktick_api::Error::Api(ApiError::NotFound {
                resource: "project".to_string(),
                id: requested.to_string(),
            })
            .into()
        })
}
