//! Time-interval accounting engine for clock-punch payroll processing.
//!
//! This crate turns the raw clock punches captured for one (employee, day)
//! record into payroll-ready worked and overtime minutes: punches are
//! extracted and deduplicated, reordered when capture order disagrees with
//! chronological order (with an overnight-shift heuristic), mapped onto named
//! events (entry, meal, dinner, exit), and run through the deduction engine
//! that applies meal/dinner policy and manual no-labor exception intervals on
//! a timeline that may wrap past midnight.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
