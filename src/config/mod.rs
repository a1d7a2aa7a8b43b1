//! Rules configuration for the timeclock engine.
//!
//! This module provides the [`WorkRules`] value object that parameterizes the
//! deduction engine, and the [`RulesLoader`] that persists it as a JSON file.

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{RoundingMode, WorkRules};
