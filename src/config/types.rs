//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::HistoricalYear;

/// Metadata about the payroll structure the constants belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollMetadata {
    /// Short identifier (e.g., "TDF-2025").
    pub code: String,
    /// Human-readable name of the payroll structure.
    pub name: String,
    /// Version or effective year of the rules.
    pub version: String,
    /// Jurisdiction the rules apply to.
    pub jurisdiction: String,
}

/// The published percentages that drive the formula chain.
///
/// `CalcConstants::default()` returns the 2025 values. The same values are
/// shipped in `constants.yaml`.
///
/// # Example
///
/// ```
/// use salary_engine::config::CalcConstants;
/// use rust_decimal::Decimal;
///
/// let constants = CalcConstants::default();
/// assert_eq!(constants.jubilacion, Decimal::new(14, 2));
/// assert_eq!(constants.bloqueo_titulo_factor, Decimal::new(70, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConstants {
    /// Seniority supplement per year, as a fraction of básico.
    pub antiguedad_per_year: Decimal,
    /// Higher-education credential supplement, as a fraction of básico.
    pub titulo_ed_superior: Decimal,
    /// Zone supplement, as a fraction of básico + antigüedad + título.
    pub suplemento_zona: Decimal,
    /// Mayor dedicación supplement, as a fraction of básico.
    pub mayor_dedicacion: Decimal,
    /// Apoyo supplement, as a fraction of básico.
    pub suplemento_apoyo: Decimal,
    /// Bloqueo de título, as a fraction of the adjusted comisario pay.
    pub bloqueo_titulo_factor: Decimal,
    /// Retirement-fund deduction, as a fraction of the remunerative subtotal.
    pub jubilacion: Decimal,
    /// Health-insurance deduction, as a fraction of the remunerative subtotal.
    pub obra_social: Decimal,
}

impl Default for CalcConstants {
    fn default() -> Self {
        Self {
            antiguedad_per_year: Decimal::new(2, 2),
            titulo_ed_superior: Decimal::new(35, 2),
            suplemento_zona: Decimal::new(100, 2),
            mayor_dedicacion: Decimal::new(4442, 4),
            suplemento_apoyo: Decimal::new(4997, 4),
            // 35% x 2 of the comisario pay
            bloqueo_titulo_factor: Decimal::new(70, 2),
            jubilacion: Decimal::new(14, 2),
            obra_social: Decimal::new(3, 2),
        }
    }
}

/// Constants configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ConstantsConfig {
    /// The calculation constants.
    pub constants: CalcConstants,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Payroll metadata.
    metadata: PayrollMetadata,
    /// Calculation constants.
    constants: CalcConstants,
    /// Historical tables keyed by year.
    history: BTreeMap<i32, HistoricalYear>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// If two tables share a year, the later one wins; [`super::ConfigLoader`]
    /// rejects that case before getting here.
    pub fn new(
        metadata: PayrollMetadata,
        constants: CalcConstants,
        history: Vec<HistoricalYear>,
    ) -> Self {
        let history = history.into_iter().map(|h| (h.year, h)).collect();
        Self {
            metadata,
            constants,
            history,
        }
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the calculation constants.
    pub fn constants(&self) -> &CalcConstants {
        &self.constants
    }

    /// Returns the historical table for a year, if configured.
    pub fn history(&self, year: i32) -> Option<&HistoricalYear> {
        self.history.get(&year)
    }

    /// Returns the configured years, oldest first.
    pub fn history_years(&self) -> Vec<i32> {
        self.history.keys().copied().collect()
    }
}
