//! Predicate compilation from a validated filter spec.

use chrono::{DateTime, Utc};
use ticktick_api::Task;

use crate::dates;
use crate::search;
use crate::spec::{DateWindow, FilterSpec};

/// A single decision function compiled from a [`FilterSpec`] and one
/// captured "now" instant.
///
/// The instant is captured once per filter run so that every task in the run
/// is judged against the same clock reading; boundary tasks cannot flip
/// classification mid-scan. Criteria compose as a strict conjunction — an
/// absent criterion is vacuously true, and adding criteria only narrows the
/// result set.
#[derive(Debug)]
pub struct TaskPredicate<'a> {
    spec: &'a FilterSpec,
    now: DateTime<Utc>,
}

impl<'a> TaskPredicate<'a> {
    /// Compiles a predicate over the given spec and instant.
    pub fn new(spec: &'a FilterSpec, now: DateTime<Utc>) -> Self {
        Self { spec, now }
    }

    /// The instant every date window is evaluated against.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Returns true if the task satisfies every active criterion.
    pub fn matches(&self, task: &Task) -> bool {
        let due = dates::due_instant(task);

        let date_match = match self.spec.date_window {
            DateWindow::All => true,
            DateWindow::Today => dates::is_due_today(due, self.now),
            DateWindow::Tomorrow => dates::is_due_in_days(due, self.now, 1),
            DateWindow::Overdue => dates::is_overdue(due, self.now),
            DateWindow::Within7Days => dates::is_within_7_days(due, self.now),
        };
        if !date_match {
            return false;
        }

        if let Some(priority) = self.spec.priority {
            if task.priority != priority.value() {
                return false;
            }
        }

        if let Some(term) = &self.spec.search_term {
            if !search::task_matches(task, term) {
                return false;
            }
        }

        true
    }
}
