//! Dinner-break deduction.

use crate::models::{EventMap, TimeOfDay, minutes_between};

/// The result of computing the dinner deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DinnerDeduction {
    /// Minutes deducted for the dinner break.
    pub minutes: u32,
    /// The deducted [start, end) window on the shift timeline.
    pub window: Option<(TimeOfDay, TimeOfDay)>,
}

/// Computes the dinner deduction for a day's events.
///
/// Unlike the meal break, dinner has no cap or ceiling: the clocked duration
/// is always charged in full. A missing dinner-in punch substitutes the exit,
/// the same incomplete-pair rule the meal deduction uses.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::{compute_dinner_deduction, map_events};
/// use timeclock_engine::models::extract_punches;
///
/// let events = map_events(&extract_punches("09:00 13:00 13:30 20:00 20:45 23:00"));
/// let dinner = compute_dinner_deduction(&events);
/// assert_eq!(dinner.minutes, 45);
/// ```
pub fn compute_dinner_deduction(events: &EventMap) -> DinnerDeduction {
    let Some(dinner_out) = events.dinner_out else {
        return DinnerDeduction::default();
    };
    let Some(end) = events.dinner_in.or(events.exit) else {
        return DinnerDeduction::default();
    };

    DinnerDeduction {
        minutes: minutes_between(dinner_out, end),
        window: Some((dinner_out, end)),
    }
}
