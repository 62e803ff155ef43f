//! Filter command implementation.
//!
//! Validates the criteria, runs the cross-project aggregation, and prints
//! the grouped report.

use ticktick_api::TickTickClient;
use ticktick_filter::{filter_tasks, FilterInput, FilterSpec};

use super::{CommandContext, Result};

/// Options for the filter command, mirroring the raw filter input.
#[derive(Debug, Default)]
pub struct FilterOptions {
    /// Date window spelling.
    pub date: Option<String>,
    /// Priority wire value.
    pub priority: Option<i64>,
    /// Search text.
    pub search: Option<String>,
    /// Project ID or the "inbox" keyword.
    pub project: Option<String>,
}

/// Executes the filter command.
pub async fn execute(ctx: &CommandContext, opts: &FilterOptions, token: &str) -> Result<()> {
    // Validation happens before any fetch
    let spec = FilterSpec::validate(FilterInput {
        date_filter: opts.date.clone(),
        priority: opts.priority,
        search_term: opts.search.clone(),
        project_id: opts.project.clone(),
    })?;

    if ctx.verbose {
        eprintln!("Filtering: {}", spec.describe());
    }

    let client = TickTickClient::new(token);
    let report = filter_tasks(&client, &spec).await?;

    if !ctx.quiet {
        print!("{}", report.render());
    }
    Ok(())
}
