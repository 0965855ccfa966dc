//! Configuration loading and management for the salary engine.
//!
//! This module loads the payroll metadata, the calculation constants and the
//! historical monthly tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tdf2025").unwrap();
//! println!("Loaded payroll: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalcConstants, ConstantsConfig, PayrollConfig, PayrollMetadata};
