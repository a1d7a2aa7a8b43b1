//! Punch record model and raw-cell punch extraction.
//!
//! A clocking device export holds one free-text cell per (employee, day)
//! with every punch captured that day. Capture order is NOT guaranteed to be
//! chronological; operators sometimes paste punches out of order. Extraction
//! preserves appearance order and leaves reordering to the normalizer.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::time_of_day::TimeOfDay;

static TIME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{1,2}(?::\d{1,2})?").expect("valid pattern"));

/// Extracts clock punches from a raw device cell.
///
/// Scans the string for `H:MM`, `HH:MM` or `HH:MM:SS` tokens, keeps them in
/// order of appearance, and deduplicates exact HH:MM repeats (the first
/// occurrence wins). Out-of-range tokens are skipped. Garbage in, empty list
/// out; extraction never fails.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::extract_punches;
///
/// let punches = extract_punches("09:00, 13:00:12, 13:00, 18:00");
/// let rendered: Vec<String> = punches.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered, vec!["09:00", "13:00", "18:00"]); // exact repeat dropped
/// ```
pub fn extract_punches(raw: &str) -> Vec<TimeOfDay> {
    let mut found = Vec::new();
    for token in TIME_TOKEN.find_iter(raw) {
        let Some(t) = TimeOfDay::parse(token.as_str()) else {
            continue;
        };
        if !found.contains(&t) {
            found.push(t);
        }
    }
    found
}

/// The clock punches captured for one employee on one calendar day.
///
/// `punches` holds the deduplicated times in capture order, exactly as
/// produced by [`extract_punches`]; chronological ordering is the concern of
/// [`normalize_punches`](crate::calculation::normalize_punches).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// The employee identifier as reported by the device.
    pub employee_id: String,
    /// The calendar day of the record.
    pub date: NaiveDate,
    /// Deduplicated punches in capture order.
    #[serde(default)]
    pub punches: Vec<TimeOfDay>,
}

impl PunchRecord {
    /// Builds a record from a raw device cell.
    pub fn from_raw(employee_id: impl Into<String>, date: NaiveDate, raw: &str) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            punches: extract_punches(raw),
        }
    }
}
