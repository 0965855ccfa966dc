//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HistoricalYear, MONTHS_PER_YEAR};

use super::types::{CalcConstants, ConstantsConfig, PayrollConfig, PayrollMetadata};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/tdf2025/
/// ├── payroll.yaml     # Payroll metadata
/// ├── constants.yaml   # Calculation percentages
/// └── history/
///     └── 2025.yaml    # Twelve monthly records for 2025
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tdf2025")?;
/// let history = loader.get_history(2025)?;
/// println!("{} months of {}", history.months.len(), history.year);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing fields (`ConfigParseError`)
    /// - A history file does not hold exactly twelve months, or two files
    ///   describe the same year (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;
        let constants = Self::load_yaml::<ConstantsConfig>(&path.join("constants.yaml"))?;
        let history = Self::load_history(&path.join("history"))?;

        debug!(
            code = %metadata.code,
            years = history.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, constants.constants, history),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all history files from the history directory.
    fn load_history(history_dir: &Path) -> EngineResult<Vec<HistoricalYear>> {
        let history_dir_str = history_dir.display().to_string();

        if !history_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: history_dir_str,
            });
        }

        let entries = fs::read_dir(history_dir).map_err(|_| EngineError::ConfigNotFound {
            path: history_dir_str.clone(),
        })?;

        let mut history = Vec::new();
        let mut seen_years = HashSet::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: history_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "yaml") {
                continue;
            }

            let year = Self::load_yaml::<HistoricalYear>(&path)?;
            let path_str = path.display().to_string();

            if year.months.len() != MONTHS_PER_YEAR {
                return Err(EngineError::InvalidConfig {
                    path: path_str,
                    message: format!(
                        "expected {} months, found {}",
                        MONTHS_PER_YEAR,
                        year.months.len()
                    ),
                });
            }

            if !seen_years.insert(year.year) {
                return Err(EngineError::InvalidConfig {
                    path: path_str,
                    message: format!("duplicate history for year {}", year.year),
                });
            }

            history.push(year);
        }

        if history.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no history files found)", history_dir_str),
            });
        }

        Ok(history)
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns the calculation constants.
    pub fn constants(&self) -> &CalcConstants {
        self.config.constants()
    }

    /// Gets the historical table for a year.
    ///
    /// Returns `HistoryNotFound` if no table is configured for `year`.
    pub fn get_history(&self, year: i32) -> EngineResult<&HistoricalYear> {
        self.config
            .history(year)
            .ok_or(EngineError::HistoryNotFound { year })
    }

    /// Returns the years with a historical table, oldest first.
    pub fn history_years(&self) -> Vec<i32> {
        self.config.history_years()
    }
}
