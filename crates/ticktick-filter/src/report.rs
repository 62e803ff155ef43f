//! Human-readable rendering of tasks, projects, and filter reports.
//!
//! Output is plain multi-line text blocks. Dates are echoed in the service's
//! native string form rather than reformatted.

use ticktick_api::{Priority, Project, Task};

use crate::aggregate::FilterReport;

/// Formats one task as a labeled block.
///
/// Optional fields (dates, content, subtasks) appear only when present. A
/// priority value outside the four legal levels is printed as its raw number.
pub fn format_task(task: &Task) -> String {
    let mut out = format!("ID: {}\n", task.id);
    out.push_str(&format!("Title: {}\n", task.title));
    out.push_str(&format!("Project ID: {}\n", task.project_id));

    if let Some(start) = &task.start_date {
        out.push_str(&format!("Start Date: {start}\n"));
    }
    if let Some(due) = &task.due_date {
        out.push_str(&format!("Due Date: {due}\n"));
    }

    let priority = match Priority::from_value(task.priority) {
        Some(level) => level.label().to_string(),
        None => task.priority.to_string(),
    };
    out.push_str(&format!("Priority: {priority}\n"));

    let status = if task.is_completed() { "Completed" } else { "Active" };
    out.push_str(&format!("Status: {status}\n"));

    if !task.content.is_empty() {
        out.push_str(&format!("\nContent:\n{}\n", task.content));
    }

    if !task.items.is_empty() {
        out.push_str(&format!("\nSubtasks ({}):\n", task.items.len()));
        for (i, item) in task.items.iter().enumerate() {
            let mark = if item.is_completed() { "✓" } else { "□" };
            out.push_str(&format!("{}. [{mark}] {}\n", i + 1, item.title));
        }
    }

    out
}

/// Formats one project as a labeled block, with optional fields only when
/// the service sent them.
pub fn format_project(project: &Project) -> String {
    let mut out = format!("Name: {}\n", project.name);
    out.push_str(&format!("ID: {}\n", project.id));

    if let Some(color) = &project.color {
        out.push_str(&format!("Color: {color}\n"));
    }
    if let Some(view_mode) = &project.view_mode {
        out.push_str(&format!("View Mode: {view_mode}\n"));
    }
    if let Some(closed) = project.closed {
        let answer = if closed { "Yes" } else { "No" };
        out.push_str(&format!("Closed: {answer}\n"));
    }
    if let Some(kind) = &project.kind {
        out.push_str(&format!("Kind: {kind}\n"));
    }

    out
}

/// Renders a plain list of projects.
pub fn render_project_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let mut out = format!("Found {} projects:\n\n", projects.len());
    for (i, project) in projects.iter().enumerate() {
        out.push_str(&format!("Project {}:\n{}\n", i + 1, format_project(project)));
    }
    out
}

/// Renders one project's task list, numbered in fetch order.
pub fn render_project_tasks(project_name: &str, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("No tasks found in project '{project_name}'.");
    }

    let mut out = format!(
        "Found {} tasks in project '{project_name}':\n\n",
        tasks.len()
    );
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!("Task {}:\n{}\n", i + 1, format_task(task)));
    }
    out
}

impl FilterReport {
    /// Renders the report as grouped, human-readable text.
    ///
    /// Every scanned project gets a group header even with zero matches, so
    /// the absence of matches is visible rather than silent. Task numbers are
    /// the tasks' positions in the original fetch order, not a renumbering of
    /// the matches.
    pub fn render(&self) -> String {
        if self.project_count == 0 {
            return "No projects found.".to_string();
        }

        let mut out = format!("Found {} projects:\n\n", self.project_count);
        for group in &self.groups {
            out.push_str(&format!("Project {}:\n", group.index));
            out.push_str(&format_project(&group.project));

            match &group.fetch_error {
                Some(error) => {
                    out.push_str(&format!("Error fetching tasks: {error}\n\n\n"));
                }
                None => {
                    out.push_str(&format!(
                        "With {} tasks that are to be '{}' in this project :\n",
                        group.matches.len(),
                        self.label
                    ));
                    for (position, task) in &group.matches {
                        out.push_str(&format!("Task {position}:\n{}\n", format_task(task)));
                    }
                    out.push_str("\n\n");
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticktick_api::ChecklistItem;

    use crate::aggregate::ProjectGroup;

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Review Q4 report".to_string(),
            content: String::new(),
            project_id: "p1".to_string(),
            start_date: None,
            due_date: None,
            priority: 5,
            status: 0,
            items: vec![],
        }
    }

    fn project(name: &str) -> Project {
        Project {
            id: "p1".to_string(),
            name: name.to_string(),
            color: None,
            view_mode: None,
            closed: None,
            kind: None,
        }
    }

    #[test]
    fn test_format_task_minimal() {
        let text = format_task(&task());
        assert_eq!(
            text,
            "ID: t1\nTitle: Review Q4 report\nProject ID: p1\nPriority: High\nStatus: Active\n"
        );
    }

    #[test]
    fn test_format_task_full() {
        let mut t = task();
        t.start_date = Some("2019-11-13T03:00:00+0000".to_string());
        t.due_date = Some("2019-11-14T03:00:00+0000".to_string());
        t.content = "All sections".to_string();
        t.status = 2;
        t.items = vec![
            ChecklistItem {
                id: "i1".to_string(),
                title: "Section one".to_string(),
                status: 1,
            },
            ChecklistItem {
                id: "i2".to_string(),
                title: "Section two".to_string(),
                status: 0,
            },
        ];

        let text = format_task(&t);
        assert!(text.contains("Start Date: 2019-11-13T03:00:00+0000\n"));
        assert!(text.contains("Due Date: 2019-11-14T03:00:00+0000\n"));
        assert!(text.contains("Status: Completed\n"));
        assert!(text.contains("\nContent:\nAll sections\n"));
        assert!(text.contains("\nSubtasks (2):\n1. [✓] Section one\n2. [□] Section two\n"));
    }

    #[test]
    fn test_format_task_unknown_priority_prints_raw_value() {
        let mut t = task();
        t.priority = 2;
        assert!(format_task(&t).contains("Priority: 2\n"));
    }

    #[test]
    fn test_format_project_optional_fields() {
        let minimal = format_project(&project("Work"));
        assert_eq!(minimal, "Name: Work\nID: p1\n");

        let mut p = project("Work");
        p.color = Some("#F18181".to_string());
        p.view_mode = Some("kanban".to_string());
        p.closed = Some(false);
        p.kind = Some("TASK".to_string());
        let full = format_project(&p);
        assert!(full.contains("Color: #F18181\n"));
        assert!(full.contains("View Mode: kanban\n"));
        // Closed is printed whenever the field is present, even when false
        assert!(full.contains("Closed: No\n"));
        assert!(full.contains("Kind: TASK\n"));
    }

    #[test]
    fn test_render_project_list() {
        let projects = vec![project("Work"), project("Home")];
        let text = render_project_list(&projects);
        assert!(text.starts_with("Found 2 projects:\n\n"));
        assert!(text.contains("Project 1:\nName: Work\n"));
        assert!(text.contains("Project 2:\nName: Home\n"));

        assert_eq!(render_project_list(&[]), "No projects found.");
    }

    #[test]
    fn test_render_project_tasks() {
        let text = render_project_tasks("Work", &[task()]);
        assert!(text.starts_with("Found 1 tasks in project 'Work':\n\n"));
        assert!(text.contains("Task 1:\nID: t1\n"));

        assert_eq!(
            render_project_tasks("Quiet", &[]),
            "No tasks found in project 'Quiet'."
        );
    }

    #[test]
    fn test_render_report_groups_and_positions() {
        let report = FilterReport {
            label: "priority High".to_string(),
            project_count: 2,
            groups: vec![
                ProjectGroup {
                    index: 1,
                    project: project("Work"),
                    matches: vec![(3, task())],
                    fetch_error: None,
                },
                ProjectGroup {
                    index: 2,
                    project: project("Quiet"),
                    matches: vec![],
                    fetch_error: None,
                },
            ],
        };

        let text = report.render();
        assert!(text.starts_with("Found 2 projects:\n\n"));
        // Matched task keeps its original fetch position
        assert!(text.contains("Task 3:\nID: t1\n"));
        assert!(text.contains("With 1 tasks that are to be 'priority High' in this project :\n"));
        // Zero-match project is still reported
        assert!(text.contains("With 0 tasks that are to be 'priority High' in this project :\n"));
    }

    #[test]
    fn test_render_report_fetch_error_group() {
        let report = FilterReport {
            label: "all tasks".to_string(),
            project_count: 1,
            groups: vec![ProjectGroup {
                index: 1,
                project: project("Broken"),
                matches: vec![],
                fetch_error: Some("HTTP 500: backend unavailable".to_string()),
            }],
        };

        let text = report.render();
        assert!(text.contains("Error fetching tasks: HTTP 500: backend unavailable\n"));
        assert!(!text.contains("With 0 tasks"));
    }

    #[test]
    fn test_render_report_no_projects() {
        let report = FilterReport {
            label: "all tasks".to_string(),
            project_count: 0,
            groups: vec![],
        };
        assert_eq!(report.render(), "No projects found.");
    }
}
