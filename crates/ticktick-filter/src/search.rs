//! Case-insensitive text search across a task's searchable surfaces.

use ticktick_api::Task;

/// Returns true if `term` occurs (case-insensitively) in the task's title,
/// content, or any subtask title.
///
/// Blank terms are rejected during validation and never reach this function;
/// there is no "match everything" behavior here.
pub fn task_matches(task: &Task, term: &str) -> bool {
    let needle = term.to_lowercase();

    if task.title.to_lowercase().contains(&needle) {
        return true;
    }
    if task.content.to_lowercase().contains(&needle) {
        return true;
    }
    task.items
        .iter()
        .any(|item| item.title.to_lowercase().contains(&needle))
}
