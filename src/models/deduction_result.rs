//! The deduction engine's output.

use serde::{Deserialize, Serialize};

/// Worked/overtime minutes and itemized deductions for one day.
///
/// All fields are derived per computation, never stored state. The last three
/// counters are informational diagnostics for audit notes; they never abort a
/// computation and are not subtracted a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Minutes worked after all deductions.
    pub worked_min: u32,
    /// Minutes beyond the overtime threshold, optionally rounded.
    pub overtime_min: u32,
    /// Minutes deducted for the meal break.
    pub meal_deduction_min: u32,
    /// Minutes deducted for the dinner break.
    pub dinner_deduction_min: u32,
    /// Minutes deducted for merged no-labor intervals.
    pub no_labor_deduction_min: u32,
    /// Minutes of no-labor input that overlapped the meal/dinner windows
    /// (informational; already covered by those deductions).
    pub meal_dinner_overlap_min: u32,
    /// Minutes of overlap between no-labor intervals that were merged.
    pub merged_overlap_min: u32,
    /// Minutes of no-labor input that fell outside the shift window.
    pub ignored_outside_shift_min: u32,
}

impl DeductionResult {
    /// The defined result for a day with no bracketing entry/exit pair.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of all deduction components.
    pub fn total_deductions_min(&self) -> u32 {
        self.meal_deduction_min + self.dinner_deduction_min + self.no_labor_deduction_min
    }

    /// Returns true when any diagnostic counter fired.
    ///
    /// Report builders use this to attach an observations note to the row.
    pub fn has_diagnostics(&self) -> bool {
        self.meal_dinner_overlap_min > 0
            || self.merged_overlap_min > 0
            || self.ignored_outside_shift_min > 0
    }
}
