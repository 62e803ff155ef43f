//! Task model for the TickTick Open API.
//!
//! Tasks arrive with the service's camelCase wire names and its non-standard
//! date strings (`2019-11-14T03:00:00+0000`). Date fields are kept as opaque
//! strings here; parsing them is the filtering layer's concern.

use serde::{Deserialize, Serialize};

/// Status value the API uses for a completed task.
pub const TASK_STATUS_COMPLETED: i32 = 2;

/// Status value the API uses for a completed checklist item.
pub const ITEM_STATUS_COMPLETED: i32 = 1;

/// A task in TickTick.
///
/// Treated as an immutable read snapshot for the duration of one evaluation;
/// this crate never mutates or writes tasks back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The unique identifier for the task.
    pub id: String,

    /// The task title.
    #[serde(default)]
    pub title: String,

    /// Free-text content/description of the task.
    #[serde(default)]
    pub content: String,

    /// The ID of the project the task belongs to.
    #[serde(default)]
    pub project_id: String,

    /// Start timestamp in the service's native string format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Due timestamp in the service's native string format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Priority value: 0 (none), 1 (low), 3 (medium), 5 (high).
    #[serde(default)]
    pub priority: i64,

    /// Task status; 2 means completed, anything else is active.
    #[serde(default)]
    pub status: i32,

    /// Ordered checklist of subtasks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ChecklistItem>,
}

impl Task {
    /// Returns true if the task is completed.
    pub fn is_completed(&self) -> bool {
        self.status == TASK_STATUS_COMPLETED
    }

    /// Returns the task's priority as a domain value, if it is one of the
    /// four legal levels.
    pub fn priority_level(&self) -> Option<Priority> {
        Priority::from_value(self.priority)
    }
}

/// A subtask (checklist item) owned by its parent task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// The unique identifier for the item.
    #[serde(default)]
    pub id: String,

    /// The item title.
    #[serde(default)]
    pub title: String,

    /// Item status; 1 means completed.
    #[serde(default)]
    pub status: i32,
}

impl ChecklistItem {
    /// Returns true if the item is checked off.
    pub fn is_completed(&self) -> bool {
        self.status == ITEM_STATUS_COMPLETED
    }
}

/// Task priority level.
///
/// TickTick uses the sparse values 0/1/3/5; these four are the only legal
/// domain values. Any other integer is invalid input, not a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    /// The legal wire values, in ascending order.
    pub const VALUES: [i64; 4] = [0, 1, 3, 5];

    /// Converts a wire value into a priority, rejecting non-domain integers.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Priority::None),
            1 => Some(Priority::Low),
            3 => Some(Priority::Medium),
            5 => Some(Priority::High),
            _ => None,
        }
    }

    /// Returns the wire value for this priority.
    pub fn value(self) -> i64 {
        match self {
            Priority::None => 0,
            Priority::Low => 1,
            Priority::Medium => 3,
            Priority::High => 5,
        }
    }

    /// Returns the display name for this priority.
    pub fn label(self) -> &'static str {
        match self {
            Priority::None => "None",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserialize_minimal() {
        let json = r#"{"id": "63b7bebb91c0a5474805fcd4"}"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "63b7bebb91c0a5474805fcd4");
        assert!(task.title.is_empty());
        assert_eq!(task.priority, 0);
        assert_eq!(task.status, 0);
        assert!(!task.is_completed());
        assert!(task.items.is_empty());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_task_deserialize_full() {
        let json = r#"{
            "id": "63b7bebb91c0a5474805fcd4",
            "title": "Review Q4 report",
            "content": "Review all sections",
            "projectId": "6226ff9877acee87727f6bca",
            "startDate": "2019-11-13T03:00:00+0000",
            "dueDate": "2019-11-14T03:00:00+0000",
            "priority": 5,
            "status": 2,
            "items": [
                {"id": "i1", "title": "Section one", "status": 1},
                {"id": "i2", "title": "Section two", "status": 0}
            ]
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.title, "Review Q4 report");
        assert_eq!(task.project_id, "6226ff9877acee87727f6bca");
        assert_eq!(task.due_date.as_deref(), Some("2019-11-14T03:00:00+0000"));
        assert_eq!(task.priority_level(), Some(Priority::High));
        assert!(task.is_completed());
        assert_eq!(task.items.len(), 2);
        assert!(task.items[0].is_completed());
        assert!(!task.items[1].is_completed());
    }

    #[test]
    fn test_task_serialize_uses_wire_names() {
        let task = Task {
            id: "1".to_string(),
            title: "t".to_string(),
            content: String::new(),
            project_id: "p".to_string(),
            start_date: None,
            due_date: Some("2019-11-14T03:00:00+0000".to_string()),
            priority: 3,
            status: 0,
            items: vec![],
        };

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"projectId\":\"p\""));
        assert!(json.contains("\"dueDate\""));
        // Absent optional fields are skipped
        assert!(!json.contains("startDate"));
    }

    #[test]
    fn test_priority_from_value_legal() {
        assert_eq!(Priority::from_value(0), Some(Priority::None));
        assert_eq!(Priority::from_value(1), Some(Priority::Low));
        assert_eq!(Priority::from_value(3), Some(Priority::Medium));
        assert_eq!(Priority::from_value(5), Some(Priority::High));
    }

    #[test]
    fn test_priority_from_value_rejects_non_domain() {
        // 2 and 4 are not legal even though they sit between legal values
        assert_eq!(Priority::from_value(2), None);
        assert_eq!(Priority::from_value(4), None);
        assert_eq!(Priority::from_value(99), None);
        assert_eq!(Priority::from_value(-1), None);
    }

    #[test]
    fn test_priority_round_trips_value() {
        for value in Priority::VALUES {
            assert_eq!(Priority::from_value(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::None.to_string(), "None");
        assert_eq!(Priority::Low.to_string(), "Low");
        assert_eq!(Priority::Medium.to_string(), "Medium");
        assert_eq!(Priority::High.to_string(), "High");
    }

    #[test]
    fn test_task_priority_level_unknown_value() {
        let json = r#"{"id": "1", "priority": 2}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority_level(), None);
    }
}
