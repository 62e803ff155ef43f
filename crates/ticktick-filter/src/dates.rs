//! Lenient parsing of TickTick date strings and date-window classification.
//!
//! The API emits timestamps like `2019-11-14T03:00:00+0000` — no colon in
//! the offset, fractional seconds sometimes present, sometimes not. Parsing
//! tries a fixed sequence of formats and reports failure as `None`; callers
//! treat an unknown date as "matches no date window", never as an error.

use chrono::{DateTime, Duration, Utc};
use ticktick_api::Task;
use tracing::trace;

/// Parses a TickTick date string into a UTC instant.
///
/// Tried in order, first success wins:
/// 1. fractional seconds with an offset,
/// 2. whole seconds after normalizing a colonless `±HHMM` suffix,
/// 3. RFC 3339 after converting a trailing `Z` to `+00:00`.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_remote_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }

    let normalized = normalize_offset(raw);
    if let Ok(dt) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%:z") {
        return Some(dt.with_timezone(&Utc));
    }

    let candidate = match normalized.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => normalized,
    };
    match DateTime::parse_from_rfc3339(&candidate) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => {
            trace!(raw, "unparseable date string");
            None
        }
    }
}

/// Rewrites a trailing colonless offset (`±HHMM`) into colon form (`±HH:MM`).
///
/// Strings of 5 characters or fewer are returned untouched; the suffix is
/// only rewritten when the sign sits exactly 5 characters from the end and
/// the remaining 4 are digits.
fn normalize_offset(raw: &str) -> String {
    if raw.len() > 5 && raw.is_ascii() {
        let (head, suffix) = raw.split_at(raw.len() - 5);
        let sign = suffix.as_bytes()[0] as char;
        if (sign == '+' || sign == '-') && suffix[1..].bytes().all(|b| b.is_ascii_digit()) {
            return format!("{head}{sign}{}:{}", &suffix[1..3], &suffix[3..5]);
        }
    }
    raw.to_string()
}

/// Returns the task's due date as a UTC instant, if present and parseable.
pub fn due_instant(task: &Task) -> Option<DateTime<Utc>> {
    task.due_date.as_deref().and_then(parse_remote_date)
}

/// Returns true if the due date falls on the same UTC calendar day as `now`.
pub fn is_due_today(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    due.is_some_and(|d| d.date_naive() == now.date_naive())
}

/// Returns true if the due instant is strictly earlier than `now`.
pub fn is_overdue(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    due.is_some_and(|d| d < now)
}

/// Returns true if the due date falls on the UTC calendar day `days` days
/// after `now`.
pub fn is_due_in_days(due: Option<DateTime<Utc>>, now: DateTime<Utc>, days: i64) -> bool {
    due.is_some_and(|d| d.date_naive() == (now + Duration::days(days)).date_naive())
}

/// Returns true if the due date lies within the inclusive window
/// `[today, today + 7 days]` in UTC calendar days.
pub fn is_within_7_days(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    due.is_some_and(|d| {
        let today = now.date_naive();
        let cutoff = today + Duration::days(7);
        let date = d.date_naive();
        today <= date && date <= cutoff
    })
}
