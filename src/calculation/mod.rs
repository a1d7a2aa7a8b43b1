//! Calculation logic for the timeclock engine.
//!
//! This module contains the deduction pipeline: punch normalization with the
//! overnight-shift heuristic, positional event mapping, wrap-aware shift
//! timeline arithmetic, meal/dinner deductions, no-labor exception handling,
//! overtime rounding, and the per-record orchestration.

mod dinner_deduction;
mod event_mapping;
mod meal_deduction;
mod no_labor;
mod normalize;
mod rounding;
mod shift_timeline;
mod worked_time;

pub use dinner_deduction::{DinnerDeduction, compute_dinner_deduction};
pub use event_mapping::map_events;
pub use meal_deduction::{MealDeduction, compute_meal_deduction};
pub use no_labor::{NoLaborOutcome, deduct_no_labor};
pub use normalize::{LATE_ENTRY_MIN, NormalizedPunches, WIDE_SPAN_MIN, normalize_punches};
pub use rounding::round_to_step;
pub use shift_timeline::{Clipped, ShiftTimeline};
pub use worked_time::{DayComputation, compute_day, compute_worked_time};
