//! No-labor exception deduction.
//!
//! Manual no-labor intervals are the messiest input the engine receives:
//! they can overlap each other, overlap the meal/dinner windows, hang past
//! the shift boundaries, or miss their end time entirely. The pipeline here
//! is clip to the shift window, sort by offset from entry, merge overlapping
//! or back-to-back intervals, then deduct only the portion of each merged
//! interval not already covered by a meal/dinner deduction window.

use crate::models::{NoLaborInterval, TimeOfDay, minutes_between};

use super::shift_timeline::{Clipped, ShiftTimeline};

/// The outcome of applying no-labor intervals to one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoLaborOutcome {
    /// Minutes deducted (merged intervals minus break-window overlap).
    pub deduction_min: u32,
    /// Minutes that overlapped the meal/dinner windows. Informational: this
    /// time is already deducted as meal/dinner and is not charged again.
    pub break_overlap_min: u32,
    /// Minutes of overlap between the supplied intervals themselves.
    /// Informational: merging, not subtraction, prevents double counting.
    pub merged_overlap_min: u32,
    /// Minutes of supplied intervals that fell outside the shift window.
    pub ignored_outside_shift_min: u32,
}

/// Applies no-labor exception intervals to the shift bracketed by
/// `entry`/`exit`, avoiding double deduction against `break_windows` (the
/// meal/dinner windows already charged).
///
/// Malformed input degrades, never fails: an interval with no start is
/// skipped, a missing end substitutes the exit, and anything outside the
/// shift window is dropped into the ignored counter.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::deduct_no_labor;
/// use timeclock_engine::models::{NoLaborInterval, TimeOfDay};
///
/// let t = |s: &str| TimeOfDay::parse(s).unwrap();
/// let exceptions = vec![NoLaborInterval::new(t("15:00"), t("15:40"), "errand")];
/// let outcome = deduct_no_labor(t("09:00"), t("18:00"), &exceptions, &[]);
/// assert_eq!(outcome.deduction_min, 40);
/// ```
pub fn deduct_no_labor(
    entry: TimeOfDay,
    exit: TimeOfDay,
    exceptions: &[NoLaborInterval],
    break_windows: &[(TimeOfDay, TimeOfDay)],
) -> NoLaborOutcome {
    let timeline = ShiftTimeline::new(entry, exit);
    let mut outcome = NoLaborOutcome::default();

    // Clip every usable interval to the shift window.
    let mut clipped: Vec<(TimeOfDay, TimeOfDay)> = Vec::new();
    for exception in exceptions {
        let Some(start) = exception.start else {
            continue;
        };
        let end = exception.end.unwrap_or(exit);
        match timeline.clip_to_window(start, end) {
            Clipped::Outside { duration_min } => {
                outcome.ignored_outside_shift_min += duration_min;
            }
            Clipped::Inside {
                start,
                end,
                trimmed_min,
            } => {
                outcome.ignored_outside_shift_min += trimmed_min;
                clipped.push((start, end));
            }
        }
    }

    clipped.sort_by_key(|&(start, _)| timeline.position(start));

    // Merge overlapping or exactly back-to-back intervals, folding into a
    // fresh list so each step is a pure extend-or-append decision.
    let merged = clipped
        .into_iter()
        .fold(Vec::<(TimeOfDay, TimeOfDay)>::new(), |mut merged, (start, end)| {
            match merged.pop() {
                None => merged.push((start, end)),
                Some((last_start, last_end)) => {
                    let overlap = timeline.overlap_min((last_start, last_end), (start, end));
                    if overlap > 0 || last_end == start {
                        outcome.merged_overlap_min += overlap;
                        let (_, running_end) = timeline.interval_positions(last_start, last_end);
                        let (_, candidate_end) = timeline.interval_positions(start, end);
                        let furthest = if candidate_end > running_end { end } else { last_end };
                        merged.push((last_start, furthest));
                    } else {
                        merged.push((last_start, last_end));
                        merged.push((start, end));
                    }
                }
            }
            merged
        });

    // Deduct only the portion not already charged as meal/dinner.
    for (start, end) in merged {
        let duration = minutes_between(start, end);
        let overlap: u32 = break_windows
            .iter()
            .map(|&window| timeline.overlap_min((start, end), window))
            .sum();
        outcome.break_overlap_min += overlap;
        outcome.deduction_min += duration.saturating_sub(overlap);
    }

    outcome
}
