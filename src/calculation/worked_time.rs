//! Worked/overtime computation for one day's events.
//!
//! This is the canonical deduction pipeline; daily sheets, weekly and
//! monthly rollups all consume its output rather than re-deriving minutes
//! themselves.

use crate::config::{RoundingMode, WorkRules};
use crate::models::{
    DeductionResult, EventMap, NoLaborInterval, PunchRecord, minutes_between,
};

use super::dinner_deduction::compute_dinner_deduction;
use super::event_mapping::map_events;
use super::meal_deduction::compute_meal_deduction;
use super::no_labor::deduct_no_labor;
use super::normalize::normalize_punches;
use super::rounding::round_to_step;

/// Computes worked and overtime minutes for a day's events.
///
/// The approach, aligned with how payroll reviews a day:
/// 1. Base = minutes between entry and exit (crossing midnight if needed).
/// 2. Subtract non-worked time: the meal deduction (threshold/cap policy),
///    the dinner deduction (always full), and merged no-labor intervals
///    clipped to the shift, skipping minutes already inside a meal/dinner
///    window.
/// 3. Overtime = worked minutes beyond the threshold, optionally rounded.
///
/// A day without both entry and exit is never computed or estimated: the
/// result is the defined all-zero value. Malformed exception intervals
/// degrade per [`deduct_no_labor`]; this function never fails.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::{compute_worked_time, map_events};
/// use timeclock_engine::config::WorkRules;
/// use timeclock_engine::models::extract_punches;
///
/// let events = map_events(&extract_punches("09:00 13:00 13:30 18:00"));
/// let result = compute_worked_time(&events, &WorkRules::default(), &[]);
/// assert_eq!(result.worked_min, 510); // 8h30
/// assert_eq!(result.overtime_min, 30);
/// assert_eq!(result.meal_deduction_min, 30);
/// ```
pub fn compute_worked_time(
    events: &EventMap,
    rules: &WorkRules,
    exceptions: &[NoLaborInterval],
) -> DeductionResult {
    let (Some(entry), Some(exit)) = (events.entry, events.exit) else {
        tracing::debug!("no bracketing entry/exit; zero result");
        return DeductionResult::zero();
    };

    let total = minutes_between(entry, exit);

    let meal = compute_meal_deduction(events, rules);
    let dinner = compute_dinner_deduction(events);

    let mut charged_windows = Vec::with_capacity(2);
    if let Some(window) = meal.window {
        charged_windows.push(window);
    }
    if let Some(window) = dinner.window {
        charged_windows.push(window);
    }

    let no_labor = deduct_no_labor(entry, exit, exceptions, &charged_windows);

    let worked = total
        .saturating_sub(meal.minutes)
        .saturating_sub(dinner.minutes)
        .saturating_sub(no_labor.deduction_min);
    let mut overtime = worked.saturating_sub(rules.overtime_threshold_min);
    if rules.rounding_step_min > 1 && rules.rounding_mode != RoundingMode::None {
        overtime = round_to_step(overtime, rules.rounding_step_min, rules.rounding_mode);
    }

    tracing::debug!(total, worked, overtime, "computed worked time");

    DeductionResult {
        worked_min: worked,
        overtime_min: overtime,
        meal_deduction_min: meal.minutes,
        dinner_deduction_min: dinner.minutes,
        no_labor_deduction_min: no_labor.deduction_min,
        meal_dinner_overlap_min: no_labor.break_overlap_min,
        merged_overlap_min: no_labor.merged_overlap_min,
        ignored_outside_shift_min: no_labor.ignored_outside_shift_min,
    }
}

/// The full computation for one punch record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayComputation {
    /// The named events the punches mapped onto.
    pub events: EventMap,
    /// Worked/overtime minutes and deductions.
    pub result: DeductionResult,
    /// True when the punches had to be reordered.
    pub reordered: bool,
}

/// Runs the whole pipeline for one record: normalize, map, compute.
///
/// This is the entry point report builders call per (employee, day) row.
/// Records are independent of each other, so callers may process a batch in
/// parallel as long as the shared rules value stays read-only.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timeclock_engine::calculation::compute_day;
/// use timeclock_engine::config::WorkRules;
/// use timeclock_engine::models::PunchRecord;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
/// let record = PunchRecord::from_raw("00123", date, "09:00 13:00 13:30 18:00");
/// let day = compute_day(&record, &WorkRules::default(), &[]);
/// assert_eq!(day.result.worked_min, 510);
/// assert!(!day.reordered);
/// ```
pub fn compute_day(
    record: &PunchRecord,
    rules: &WorkRules,
    exceptions: &[NoLaborInterval],
) -> DayComputation {
    let normalized = normalize_punches(&record.punches);
    let events = map_events(&normalized.times);
    let result = compute_worked_time(&events, rules, exceptions);
    DayComputation {
        events,
        result,
        reordered: normalized.reordered,
    }
}
