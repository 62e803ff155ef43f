//! Project models for the TickTick Open API.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Keyword that denotes the account's default/inbox project.
///
/// Every account has one; it is requested by this reserved name rather than
/// by its opaque id, and resolved against the project list case-insensitively.
pub const INBOX_KEYWORD: &str = "inbox";

/// A project in TickTick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The unique identifier for the project.
    pub id: String,

    /// The project name.
    #[serde(default)]
    pub name: String,

    /// Color code in hex format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// View mode ("list", "kanban", "timeline").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<String>,

    /// Whether the project is closed/archived. Absent means open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    /// Project kind ("TASK" or "NOTE").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Project {
    /// Returns true if the project is closed/archived.
    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or(false)
    }

    /// Returns true if this is the inbox project, matched by name.
    pub fn is_inbox(&self) -> bool {
        self.name.eq_ignore_ascii_case(INBOX_KEYWORD)
    }
}

/// A project together with its task list, as returned by the project data
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    /// The project itself.
    pub project: Project,

    /// The project's tasks, in the service's order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}
