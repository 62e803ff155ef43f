//! Task filtering and classification engine for TickTick data.
//!
//! The pipeline runs in one direction: a caller supplies a [`FilterInput`],
//! validation turns it into a [`FilterSpec`], aggregation resolves the
//! candidate projects through a [`ProjectSource`], every task passes through
//! one compiled [`TaskPredicate`], and the matches land in a [`FilterReport`]
//! that renders to a grouped, human-readable string.
//!
//! All date handling is lenient: the remote service's non-standard timestamp
//! strings parse to instants where possible, and an unparseable or missing
//! date simply never matches a date window.

pub mod aggregate;
pub mod dates;
pub mod predicate;
pub mod report;
pub mod search;
pub mod source;
pub mod spec;

pub use aggregate::{filter_tasks, filter_tasks_at, AggregateError, FilterReport, ProjectGroup};
pub use predicate::TaskPredicate;
pub use report::{format_project, format_task, render_project_list, render_project_tasks};
pub use source::ProjectSource;
pub use spec::{DateWindow, FilterInput, FilterSpec, ValidationError};
