//! Filter criteria and their validation.
//!
//! A raw [`FilterInput`] (four optional fields, as the caller supplies them)
//! is checked against the legal value sets before any fetch occurs and turned
//! into a typed [`FilterSpec`]. Validation failures carry messages that
//! enumerate the legal values; they never touch the network.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ticktick_api::Priority;

/// The accepted date-window spellings, in the order they are reported.
pub const DATE_WINDOW_VALUES: [&str; 6] = [
    "all",
    "today",
    "tomorrow",
    "overdue",
    "this_week",
    "next_7_days",
];

/// A named classification of a task's due date relative to "now".
///
/// `this_week` and `next_7_days` are two spellings of the same rolling
/// inclusive `[today, today + 7 days]` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    /// No date restriction.
    #[default]
    All,
    /// Due on today's UTC calendar day.
    Today,
    /// Due on tomorrow's UTC calendar day.
    Tomorrow,
    /// Due strictly before the current instant.
    Overdue,
    /// Due within the inclusive rolling window of the next 7 days.
    Within7Days,
}

impl DateWindow {
    /// Parses a date-window spelling, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(DateWindow::All),
            "today" => Some(DateWindow::Today),
            "tomorrow" => Some(DateWindow::Tomorrow),
            "overdue" => Some(DateWindow::Overdue),
            "this_week" | "next_7_days" => Some(DateWindow::Within7Days),
            _ => None,
        }
    }

    /// Canonical spelling used in filter descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::Today => "today",
            DateWindow::Tomorrow => "tomorrow",
            DateWindow::Overdue => "overdue",
            DateWindow::Within7Days => "next_7_days",
        }
    }
}

/// Raw filter input as supplied by the caller.
///
/// All four fields are optional; absence of a field means "no restriction"
/// for that criterion. Note that `priority: Some(0)` is an explicit filter
/// for unprioritized tasks, distinct from `priority: None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterInput {
    /// Date window spelling; defaults to "all" when absent.
    #[serde(default)]
    pub date_filter: Option<String>,
    /// Priority wire value (0, 1, 3, or 5).
    #[serde(default)]
    pub priority: Option<i64>,
    /// Text to search for in title, content, and subtask titles.
    #[serde(default)]
    pub search_term: Option<String>,
    /// Restrict to one project by id, or the `inbox` keyword.
    #[serde(default)]
    pub project_id: Option<String>,
}

/// A validated, immutable set of filter criteria.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub date_window: DateWindow,
    pub priority: Option<Priority>,
    pub search_term: Option<String>,
    pub project_id: Option<String>,
}

/// Rejection of malformed filter input, detected before any fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid date filter '{0}'; valid values: all, today, tomorrow, overdue, this_week, next_7_days")]
    InvalidDateWindow(String),

    #[error("invalid priority {0}; valid values: 0 (None), 1 (Low), 3 (Medium), 5 (High)")]
    InvalidPriority(i64),

    #[error("search term cannot be empty")]
    EmptySearchTerm,
}

impl FilterSpec {
    /// Validates raw input into a spec, rejecting illegal values with
    /// messages that list the legal ones.
    ///
    /// `project_id` is opaque here; whether it resolves to a real project is
    /// decided at aggregation time.
    pub fn validate(input: FilterInput) -> Result<Self, ValidationError> {
        let date_window = match input.date_filter {
            Some(raw) => {
                DateWindow::parse(&raw).ok_or(ValidationError::InvalidDateWindow(raw))?
            }
            None => DateWindow::All,
        };

        let priority = match input.priority {
            Some(value) => Some(
                Priority::from_value(value).ok_or(ValidationError::InvalidPriority(value))?,
            ),
            None => None,
        };

        let search_term = match input.search_term {
            Some(term) => {
                if term.trim().is_empty() {
                    return Err(ValidationError::EmptySearchTerm);
                }
                Some(term)
            }
            None => None,
        };

        Ok(FilterSpec {
            date_window,
            priority,
            search_term,
            project_id: input.project_id,
        })
    }

    /// Human-readable description of the active criteria.
    ///
    /// Only criteria that deviate from "no restriction" appear, joined with
    /// " and "; with nothing active the label is "all tasks".
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.date_window != DateWindow::All {
            parts.push(self.date_window.as_str().to_string());
        }
        if let Some(priority) = self.priority {
            parts.push(format!("priority {}", priority.label()));
        }
        if let Some(term) = &self.search_term {
            parts.push(format!("matching '{term}'"));
        }
        if let Some(project_id) = &self.project_id {
            parts.push(format!("in project '{project_id}'"));
        }

        if parts.is_empty() {
            "all tasks".to_string()
        } else {
            parts.join(" and ")
        }
    }
}
