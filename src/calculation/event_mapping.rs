//! Positional mapping of normalized punches onto named events.

use crate::models::{EventMap, TimeOfDay};

/// Maps a normalized, ordered punch list onto the six event slots.
///
/// The operative rule is positional:
/// - 1 punch: entry only.
/// - 2 or more: first = entry, last = exit, and the interior punches are
///   assigned in order to meal-out, meal-in, dinner-out, dinner-in. At most
///   four interior punches are consumed; anything beyond the sixth punch is
///   dropped and counted in `overflow`.
///
/// The mapping never infers which punch "is" a meal break from durations or
/// labels. That is an intentional simplification: the clocking discipline at
/// the sites this serves makes position reliable, and manual correction
/// covers the rest.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::map_events;
/// use timeclock_engine::models::extract_punches;
///
/// let events = map_events(&extract_punches("09:00 13:00 13:30 18:00"));
/// assert_eq!(events.entry.unwrap().to_string(), "09:00");
/// assert_eq!(events.meal_out.unwrap().to_string(), "13:00");
/// assert_eq!(events.meal_in.unwrap().to_string(), "13:30");
/// assert_eq!(events.exit.unwrap().to_string(), "18:00");
/// assert!(events.dinner_out.is_none());
/// ```
pub fn map_events(times: &[TimeOfDay]) -> EventMap {
    let n = times.len();
    let mut events = EventMap {
        overflow: n.saturating_sub(6) as u32,
        ..EventMap::default()
    };

    match times {
        [] => {}
        [only] => events.entry = Some(*only),
        [first, interior @ .., last] => {
            events.entry = Some(*first);
            events.exit = Some(*last);
            let mut slots = [
                &mut events.meal_out,
                &mut events.meal_in,
                &mut events.dinner_out,
                &mut events.dinner_in,
            ];
            for (slot, t) in slots.iter_mut().zip(interior.iter().take(4)) {
                **slot = Some(*t);
            }
        }
    }

    events
}
