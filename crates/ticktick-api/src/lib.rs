//! TickTick Open API client library (read side).
//!
//! Provides [`TickTickClient`] for fetching projects and tasks, the data
//! models they deserialize into, and the tagged error types that replace
//! raw HTTP failures at the collaborator boundary.
//!
//! Write operations (creating, updating, completing, deleting) are out of
//! scope; callers treat the fetched data as an immutable snapshot.

pub mod client;
pub mod error;
pub mod models;

pub use client::TickTickClient;
pub use error::{ApiError, Error, Result};
pub use models::{ChecklistItem, Priority, Project, ProjectData, Task, INBOX_KEYWORD};
