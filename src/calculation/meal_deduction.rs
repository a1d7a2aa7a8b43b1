//! Meal-break deduction with the threshold/cap policy.

use crate::config::WorkRules;
use crate::models::{EventMap, TimeOfDay, minutes_between};

/// The result of computing the meal deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MealDeduction {
    /// Minutes deducted for the meal break.
    pub minutes: u32,
    /// The deducted [start, end) window on the shift timeline, for later
    /// overlap avoidance against no-labor intervals.
    pub window: Option<(TimeOfDay, TimeOfDay)>,
}

/// Computes the meal deduction for a day's events.
///
/// The policy is asymmetric on purpose. A short break, up to
/// `meal_short_break_ceiling_min` (default 60), is charged at most
/// `meal_cap_min` (default 30): the employee is only docked the half hour the
/// policy allots, even if the clocked break ran a little long. A break
/// exceeding the ceiling is charged in full.
///
/// A missing meal-in punch substitutes the exit: the break is treated as
/// running to the end of the shift for deduction purposes.
///
/// The recorded window covers exactly the minutes that were deducted: up to
/// the capped end when the cap applied, or to the effective break end when
/// the full duration was charged. No-labor intervals inside it are not
/// charged a second time.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::{compute_meal_deduction, map_events};
/// use timeclock_engine::config::WorkRules;
/// use timeclock_engine::models::extract_punches;
///
/// let events = map_events(&extract_punches("09:00 13:00 13:40 18:00"));
/// let meal = compute_meal_deduction(&events, &WorkRules::default());
/// // 40 minutes clocked, within the 60-minute ceiling: charge the 30 cap.
/// assert_eq!(meal.minutes, 30);
/// let (start, end) = meal.window.unwrap();
/// assert_eq!((start.to_string(), end.to_string()), ("13:00".into(), "13:30".into()));
/// ```
pub fn compute_meal_deduction(events: &EventMap, rules: &WorkRules) -> MealDeduction {
    let Some(meal_out) = events.meal_out else {
        return MealDeduction::default();
    };
    let Some(end) = events.meal_in.or(events.exit) else {
        return MealDeduction::default();
    };

    let actual = minutes_between(meal_out, end);
    if actual <= rules.meal_short_break_ceiling_min {
        let minutes = actual.min(rules.meal_cap_min);
        MealDeduction {
            minutes,
            window: Some((meal_out, meal_out.add_minutes(minutes as i64))),
        }
    } else {
        MealDeduction {
            minutes: actual,
            window: Some((meal_out, end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::map_events;
    use crate::models::extract_punches;

    fn events(raw: &str) -> EventMap {
        map_events(&extract_punches(raw))
    }

    fn window_of(meal: &MealDeduction) -> (String, String) {
        let (start, end) = meal.window.unwrap();
        (start.to_string(), end.to_string())
    }

    #[test]
    fn test_no_meal_out_means_no_deduction() {
        let meal = compute_meal_deduction(&events("09:00 18:00"), &WorkRules::default());
        assert_eq!(meal, MealDeduction::default());
    }

    #[test]
    fn test_short_break_charged_at_cap() {
        // 30 clocked minutes, within ceiling: min(30, 30) = 30.
        let meal = compute_meal_deduction(&events("09:00 13:00 13:30 18:00"), &WorkRules::default());
        assert_eq!(meal.minutes, 30);
        assert_eq!(window_of(&meal), ("13:00".into(), "13:30".into()));
    }

    #[test]
    fn test_break_under_cap_charged_in_full() {
        let meal = compute_meal_deduction(&events("09:00 13:00 13:20 18:00"), &WorkRules::default());
        assert_eq!(meal.minutes, 20);
        assert_eq!(window_of(&meal), ("13:00".into(), "13:20".into()));
    }

    #[test]
    fn test_break_at_ceiling_still_capped() {
        // Exactly 60 minutes: still the short-break branch, capped at 30.
        let meal = compute_meal_deduction(&events("09:00 12:00 13:00 18:00"), &WorkRules::default());
        assert_eq!(meal.minutes, 30);
        assert_eq!(window_of(&meal), ("12:00".into(), "12:30".into()));
    }

    #[test]
    fn test_long_break_charged_in_full() {
        // 70 minutes exceeds the 60-minute ceiling: full duration.
        let meal = compute_meal_deduction(&events("09:00 12:00 13:10 17:00"), &WorkRules::default());
        assert_eq!(meal.minutes, 70);
        assert_eq!(window_of(&meal), ("12:00".into(), "13:10".into()));
    }

    #[test]
    fn test_missing_meal_in_substitutes_exit() {
        // Meal runs 13:00 to exit 18:00 = 300 min, over the ceiling.
        let meal = compute_meal_deduction(&events("09:00 13:00 18:00"), &WorkRules::default());
        assert_eq!(meal.minutes, 300);
        assert_eq!(window_of(&meal), ("13:00".into(), "18:00".into()));
    }

    #[test]
    fn test_meal_across_midnight_on_night_shift() {
        // 23:45 to 00:25 is 40 minutes, charged at the 30 cap with the
        // window wrapping to 00:15.
        let meal = compute_meal_deduction(&events("22:00 23:45 00:25 06:00"), &WorkRules::default());
        assert_eq!(meal.minutes, 30);
        assert_eq!(window_of(&meal), ("23:45".into(), "00:15".into()));
    }

    #[test]
    fn test_custom_cap_and_ceiling() {
        let rules = WorkRules {
            meal_cap_min: 45,
            meal_short_break_ceiling_min: 90,
            ..WorkRules::default()
        };
        let meal = compute_meal_deduction(&events("09:00 12:00 13:10 18:00"), &rules);
        // 70 minutes, within the 90 ceiling: charge the 45 cap.
        assert_eq!(meal.minutes, 45);
        assert_eq!(window_of(&meal), ("12:00".into(), "12:45".into()));
    }
}
