//! Error types for the salary engine.
//!
//! The calculation itself is total and never fails. These errors cover the
//! fallible edges of the crate: loading configuration and looking up
//! reference data.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/constants.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/constants.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its contents are inconsistent.
    #[error("Invalid configuration '{path}': {message}")]
    InvalidConfig {
        /// The path to the offending file or directory.
        path: String,
        /// What is wrong with it.
        message: String,
    },

    /// No historical table is configured for the requested year.
    #[error("Historical data not found for year {year}")]
    HistoryNotFound {
        /// The requested year.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
