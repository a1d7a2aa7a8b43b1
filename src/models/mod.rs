//! Core data models for the timeclock engine.
//!
//! This module contains all the domain value types used throughout the engine.

mod deduction_result;
mod event_map;
mod no_labor;
mod punch_record;
mod time_of_day;

pub use deduction_result::DeductionResult;
pub use event_map::EventMap;
pub use no_labor::NoLaborInterval;
pub use punch_record::{PunchRecord, extract_punches};
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay, minutes_between};
