//! Cross-project aggregation of filter matches.
//!
//! Resolves the candidate project set (one project, or every open one),
//! fetches each project's tasks through the [`ProjectSource`] collaborator,
//! applies the compiled predicate, and collects the matches into a typed
//! [`FilterReport`]. The report collapses to a human-readable string only in
//! the rendering step (`report` module).

use chrono::{DateTime, Utc};
use thiserror::Error;
use ticktick_api::{Project, Task, INBOX_KEYWORD};
use tracing::{debug, warn};

use crate::predicate::TaskPredicate;
use crate::source::ProjectSource;
use crate::spec::FilterSpec;

/// Failure to produce a report at all.
///
/// Per-project task-fetch failures do not abort the run; they are recorded
/// on the affected [`ProjectGroup`] instead.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// The requested project id/keyword did not resolve against the fetched
    /// project list. No task fetch is attempted in this case.
    #[error("project '{0}' not found")]
    ProjectNotFound(String),

    /// The collaborator failed before any project group could be produced.
    #[error(transparent)]
    Source(#[from] ticktick_api::Error),
}

/// One project's slice of the report.
#[derive(Debug, Clone)]
pub struct ProjectGroup {
    /// 1-based position among the resolved projects (closed projects advance
    /// the count even though they are skipped).
    pub index: usize,
    /// The project this group belongs to.
    pub project: Project,
    /// Matching tasks with their 1-based positions in the original fetch
    /// order. Filtering never reorders matches.
    pub matches: Vec<(usize, Task)>,
    /// Failure message if this project's task fetch failed.
    pub fetch_error: Option<String>,
}

/// The aggregated outcome of one filter run.
#[derive(Debug, Clone)]
pub struct FilterReport {
    /// Human-readable description of the active criteria.
    pub label: String,
    /// Number of resolved projects, including closed ones that were skipped.
    pub project_count: usize,
    /// Per-project groups, in resolution order.
    pub groups: Vec<ProjectGroup>,
}

/// Runs one filter evaluation against the current instant.
pub async fn filter_tasks<S: ProjectSource>(
    source: &S,
    spec: &FilterSpec,
) -> Result<FilterReport, AggregateError> {
    filter_tasks_at(source, spec, Utc::now()).await
}

/// Runs one filter evaluation with an explicit "now" instant.
///
/// The instant is captured here, once, and every task in the run is
/// classified against it.
pub async fn filter_tasks_at<S: ProjectSource>(
    source: &S,
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Result<FilterReport, AggregateError> {
    let projects = source.list_projects().await?;

    let candidates = match &spec.project_id {
        Some(requested) => vec![resolve_project(projects, requested)?],
        None => projects,
    };

    let predicate = TaskPredicate::new(spec, now);
    let project_count = candidates.len();
    let mut groups = Vec::new();

    for (position, project) in candidates.into_iter().enumerate() {
        let index = position + 1;

        // Closed projects are skipped entirely, without a task fetch.
        if project.is_closed() {
            debug!(project_id = %project.id, "skipping closed project");
            continue;
        }

        match source.list_tasks(&project.id).await {
            Ok(tasks) => {
                let matches = tasks
                    .into_iter()
                    .enumerate()
                    .filter(|(_, task)| predicate.matches(task))
                    .map(|(i, task)| (i + 1, task))
                    .collect();
                groups.push(ProjectGroup {
                    index,
                    project,
                    matches,
                    fetch_error: None,
                });
            }
            Err(error) => {
                // One project's failure must not discard groups already
                // produced or prevent the remaining projects from being
                // scanned.
                warn!(project_id = %project.id, %error, "task fetch failed");
                groups.push(ProjectGroup {
                    index,
                    project,
                    matches: Vec::new(),
                    fetch_error: Some(error.to_string()),
                });
            }
        }
    }

    Ok(FilterReport {
        label: spec.describe(),
        project_count,
        groups,
    })
}

/// Resolves a single requested project: exact id match, or a
/// case-insensitive name match when the inbox keyword was used.
fn resolve_project(
    projects: Vec<Project>,
    requested: &str,
) -> Result<Project, AggregateError> {
    let want_inbox = requested.eq_ignore_ascii_case(INBOX_KEYWORD);
    projects
        .into_iter()
        .find(|p| p.id == requested || (want_inbox && p.is_inbox()))
        .ok_or_else(|| AggregateError::ProjectNotFound(requested.to_string()))
}
