//! Task show command implementation.

use ticktick_api::TickTickClient;
use ticktick_filter::format_task;

use super::{CommandContext, Result};

/// Options for the task show command.
#[derive(Debug)]
pub struct TaskShowOptions {
    /// Project ID the task belongs to.
    pub project_id: String,
    /// Task ID.
    pub task_id: String,
}

/// Executes the task show command.
pub async fn execute(ctx: &CommandContext, opts: &TaskShowOptions, token: &str) -> Result<()> {
    let client = TickTickClient::new(token);
    let task = client.get_task(&opts.project_id, &opts.task_id).await?;

    if !ctx.quiet {
        print!("{}", format_task(&task));
    }
    Ok(())
}
