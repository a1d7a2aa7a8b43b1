//! Rules configuration types.
//!
//! The deduction engine is parameterized by a small set of thresholds owned
//! by the surrounding configuration collaborator. The engine only ever reads
//! a [`WorkRules`] value passed explicitly into each call; there is no shared
//! module-level configuration.

use serde::{Deserialize, Serialize};

/// How the final overtime figure is rounded to the configured step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Leave overtime exact to the minute.
    #[default]
    None,
    /// Ceiling to the next step multiple.
    Up,
    /// Floor to the previous step multiple.
    Down,
    /// Round to the closest step multiple, ties rounding up.
    Nearest,
}

/// Business thresholds for one payroll run.
///
/// Defaults mirror the operational policy: an 8-hour day before overtime,
/// a meal break charged at most 30 minutes while it stays within the
/// 60-minute ceiling, and unrounded overtime.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::{RoundingMode, WorkRules};
///
/// let rules = WorkRules::default();
/// assert_eq!(rules.overtime_threshold_min, 480);
/// assert_eq!(rules.meal_cap_min, 30);
/// assert_eq!(rules.meal_short_break_ceiling_min, 60);
/// assert_eq!(rules.rounding_step_min, 1);
/// assert_eq!(rules.rounding_mode, RoundingMode::None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkRules {
    /// Worked minutes before overtime starts.
    pub overtime_threshold_min: u32,
    /// Maximum minutes charged for a meal break within the ceiling.
    pub meal_cap_min: u32,
    /// Meal duration up to which only the cap is charged; beyond it the full
    /// duration is deducted.
    pub meal_short_break_ceiling_min: u32,
    /// Rounding step for overtime; 1 disables rounding.
    pub rounding_step_min: u32,
    /// Rounding mode for overtime.
    pub rounding_mode: RoundingMode,
}

impl Default for WorkRules {
    fn default() -> Self {
        Self {
            overtime_threshold_min: 480,
            meal_cap_min: 30,
            meal_short_break_ceiling_min: 60,
            rounding_step_min: 1,
            rounding_mode: RoundingMode::None,
        }
    }
}
