//! Rounding of the overtime figure to a configured step.

use crate::config::RoundingMode;

/// Rounds a minute value to a multiple of `step` per `mode`.
///
/// A step of 0 or 1, or [`RoundingMode::None`], leaves the value untouched;
/// overtime is exact to the minute by default. `Nearest` rounds ties up.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::round_to_step;
/// use timeclock_engine::config::RoundingMode;
///
/// assert_eq!(round_to_step(47, 15, RoundingMode::Up), 60);
/// assert_eq!(round_to_step(47, 15, RoundingMode::Down), 45);
/// assert_eq!(round_to_step(47, 15, RoundingMode::Nearest), 45);
/// assert_eq!(round_to_step(47, 15, RoundingMode::None), 47);
/// ```
pub fn round_to_step(value_min: u32, step: u32, mode: RoundingMode) -> u32 {
    if step <= 1 || mode == RoundingMode::None {
        return value_min;
    }
    match mode {
        RoundingMode::None => value_min,
        RoundingMode::Up => value_min.div_ceil(step) * step,
        RoundingMode::Down => (value_min / step) * step,
        RoundingMode::Nearest => {
            let lo = (value_min / step) * step;
            let hi = lo + step;
            if value_min - lo >= hi - value_min { hi } else { lo }
        }
    }
}
