//! Error types for the timeclock engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The error surface is deliberately narrow: the deduction pipeline itself
//! never fails (missing data degrades to defined zero or substituted values),
//! so errors only arise from the configuration collaborator and from strict
//! time parsing.

use thiserror::Error;

/// The main error type for the timeclock engine.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::RulesNotFound {
///     path: "/missing/rules.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rules file not found: /missing/rules.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rules file was not found at the specified path.
    #[error("Rules file not found: {path}")]
    RulesNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rules file could not be parsed.
    #[error("Failed to parse rules file '{path}': {message}")]
    RulesParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Rules file could not be written.
    #[error("Failed to write rules file '{path}': {message}")]
    RulesWriteError {
        /// The path to the file that failed to write.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A string could not be parsed as a wall-clock time.
    #[error("Invalid time value: '{value}'")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
