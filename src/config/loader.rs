//! Rules file loading and persistence.
//!
//! This module provides the [`RulesLoader`] type for loading [`WorkRules`]
//! from a JSON file and writing them back.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::WorkRules;

/// Loads and provides access to the work rules.
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./rules.json")?;
/// println!("overtime after {} min", loader.rules().overtime_threshold_min);
/// # Ok::<(), timeclock_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: WorkRules,
}

impl RulesLoader {
    /// Loads rules from the specified JSON file.
    ///
    /// Returns an error if the file is missing or contains invalid JSON.
    /// Fields absent from the file take their defaults, so a partial file is
    /// valid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RulesNotFound {
            path: path_str.clone(),
        })?;

        let rules: WorkRules =
            serde_json::from_str(&content).map_err(|e| EngineError::RulesParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "loaded work rules");
        Ok(Self { rules })
    }

    /// Loads rules, creating the file with defaults when it does not exist.
    ///
    /// This is the first-run path: a fresh deployment gets a readable rules
    /// file it can then edit.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let loader = Self {
                rules: WorkRules::default(),
            };
            loader.save(path)?;
            return Ok(loader);
        }
        Self::load(path)
    }

    /// Writes the rules back to the specified JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(&self.rules).map_err(|e| {
            EngineError::RulesWriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        fs::write(path, text).map_err(|e| EngineError::RulesWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &WorkRules {
        &self.rules
    }
}
