//! Manual no-labor exception intervals.

use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// A manually entered interval of time not worked during a shift.
///
/// Supervisors capture these for extraordinary absences inside a shift
/// (errands, incidents). The interval is an immutable input to one
/// computation; persisting edits is the corrections collaborator's job.
///
/// An absent `end` means "until clock-out". An absent `start` makes the
/// interval unusable and the engine skips it. Intervals may overlap each
/// other or the meal/dinner windows; the engine merges and de-duplicates,
/// never the caller. Reversed intervals (end before start with no overnight
/// intent) are a caller contract: interactive correction is expected to
/// reject `start == end` and warn before accepting `end < start` as an
/// overnight interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoLaborInterval {
    /// Start of the interval.
    pub start: Option<TimeOfDay>,
    /// End of the interval; `None` means it runs to the shift exit.
    pub end: Option<TimeOfDay>,
    /// Free-text reason, surfaced in report notes.
    #[serde(default)]
    pub note: String,
}

impl NoLaborInterval {
    /// Creates an interval with explicit bounds.
    pub fn new(start: TimeOfDay, end: TimeOfDay, note: impl Into<String>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            note: note.into(),
        }
    }

    /// Creates an interval that runs from `start` to the shift exit.
    pub fn until_exit(start: TimeOfDay, note: impl Into<String>) -> Self {
        Self {
            start: Some(start),
            end: None,
            note: note.into(),
        }
    }
}
