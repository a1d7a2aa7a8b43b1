//! Named-event map for one day's punches.

use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// The six semantic slots a day's punches are mapped onto.
///
/// Every slot is optional; a two-punch day fills only `entry` and `exit`.
/// Punches beyond the sixth are dropped and counted in `overflow` so reports
/// can flag the record for review. Built once per record by
/// [`map_events`](crate::calculation::map_events); the engine never mutates a
/// map in place (manual corrections construct a fresh one).
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{EventMap, TimeOfDay};
///
/// let events = EventMap {
///     entry: TimeOfDay::parse("09:00"),
///     exit: TimeOfDay::parse("18:00"),
///     ..EventMap::default()
/// };
/// assert!(events.has_full_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventMap {
    /// Clock-in at the start of the shift.
    pub entry: Option<TimeOfDay>,
    /// Clock-out to the meal break.
    pub meal_out: Option<TimeOfDay>,
    /// Clock-in back from the meal break.
    pub meal_in: Option<TimeOfDay>,
    /// Clock-out to the dinner break.
    pub dinner_out: Option<TimeOfDay>,
    /// Clock-in back from the dinner break.
    pub dinner_in: Option<TimeOfDay>,
    /// Clock-out at the end of the shift.
    pub exit: Option<TimeOfDay>,
    /// Count of punches beyond the sixth that were dropped.
    #[serde(default)]
    pub overflow: u32,
}

impl EventMap {
    /// Returns true when both entry and exit are present.
    ///
    /// Days without a bracketing entry/exit pair are never computed.
    pub fn has_full_day(&self) -> bool {
        self.entry.is_some() && self.exit.is_some()
    }
}
