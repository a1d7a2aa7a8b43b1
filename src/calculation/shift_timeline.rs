//! Wrap-aware interval arithmetic on the shift timeline.
//!
//! Comparing raw wall-clock values breaks down the moment a shift crosses
//! midnight: 00:10 is "before" a 22:00 entry numerically but two hours after
//! it operationally. All clipping, merging and overlap arithmetic therefore
//! runs on a shift timeline where, for a cross-midnight shift, any time
//! numerically earlier than the entry is taken to be the following day.

use crate::models::{MINUTES_PER_DAY, TimeOfDay};

/// The result of clipping an interval to the shift window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clipped {
    /// The interval lies entirely outside the window.
    Outside {
        /// The interval's full duration, reported for diagnostics.
        duration_min: u32,
    },
    /// The interval (or part of it) lies inside the window.
    Inside {
        /// Clipped start.
        start: TimeOfDay,
        /// Clipped end.
        end: TimeOfDay,
        /// Minutes trimmed off outside the window.
        trimmed_min: u32,
    },
}

/// The [entry, exit] window of one shift on a timeline that may wrap past
/// midnight.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::ShiftTimeline;
/// use timeclock_engine::models::TimeOfDay;
///
/// let t = |s: &str| TimeOfDay::parse(s).unwrap();
/// let timeline = ShiftTimeline::new(t("22:00"), t("06:00"));
///
/// // 00:10 falls after the entry on this timeline, not before it.
/// assert!(timeline.position(t("00:10")) > timeline.position(t("22:00")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTimeline {
    entry: TimeOfDay,
    exit: TimeOfDay,
    crosses_midnight: bool,
}

impl ShiftTimeline {
    /// Builds the timeline for a shift bracketed by `entry` and `exit`.
    ///
    /// An exit numerically smaller than the entry marks a cross-midnight
    /// shift; at most one midnight crossing is representable.
    pub fn new(entry: TimeOfDay, exit: TimeOfDay) -> Self {
        Self {
            entry,
            exit,
            crosses_midnight: exit < entry,
        }
    }

    /// Returns a time's minute position on the shift timeline.
    pub fn position(&self, t: TimeOfDay) -> u32 {
        let m = t.minute_of_day();
        if self.crosses_midnight && t < self.entry {
            m + MINUTES_PER_DAY
        } else {
            m
        }
    }

    /// Returns an interval's (start, end) positions, pushing the end to the
    /// next day when it would otherwise precede the start.
    pub fn interval_positions(&self, start: TimeOfDay, end: TimeOfDay) -> (u32, u32) {
        let a = self.position(start);
        let mut b = self.position(end);
        if b < a {
            b += MINUTES_PER_DAY;
        }
        (a, b)
    }

    /// Returns the overlap in minutes between two intervals on this timeline.
    pub fn overlap_min(&self, a: (TimeOfDay, TimeOfDay), b: (TimeOfDay, TimeOfDay)) -> u32 {
        let (a0, a1) = self.interval_positions(a.0, a.1);
        let (b0, b1) = self.interval_positions(b.0, b.1);
        let start = a0.max(b0);
        let end = a1.min(b1);
        end.saturating_sub(start)
    }

    /// Clips an interval to the shift window, reporting trimmed minutes.
    ///
    /// A degenerate or reversed interval is not validated here; it is simply
    /// positioned and clipped like any other (caller contract, see
    /// [`NoLaborInterval`](crate::models::NoLaborInterval)).
    pub fn clip_to_window(&self, start: TimeOfDay, end: TimeOfDay) -> Clipped {
        let (w0, w1) = self.interval_positions(self.entry, self.exit);
        let (a0, a1) = self.interval_positions(start, end);

        let i0 = a0.max(w0);
        let i1 = a1.min(w1);
        if i1 <= i0 {
            return Clipped::Outside {
                duration_min: a1 - a0,
            };
        }
        Clipped::Inside {
            start: TimeOfDay::from_minute_of_day(i0),
            end: TimeOfDay::from_minute_of_day(i1),
            trimmed_min: (a1 - a0) - (i1 - i0),
        }
    }
}
