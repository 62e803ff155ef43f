//! Data models for the TickTick Open API.

pub mod project;
pub mod task;

pub use project::{Project, ProjectData, INBOX_KEYWORD};
pub use task::{ChecklistItem, Priority, Task};
