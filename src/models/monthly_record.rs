//! Historical monthly salary figures.
//!
//! These records are inert reference data for charting a year of salaries.
//! They are loaded from configuration and never derived from a calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of records a historical year must contain.
pub const MONTHS_PER_YEAR: usize = 12;

/// One month of historical figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Short month label (e.g., "Ene").
    pub month: String,
    /// The básico paid that month.
    pub basico: Decimal,
    /// The net salary paid that month.
    pub neto: Decimal,
}

/// A calendar year of monthly records, in calendar order.
///
/// # Example
///
/// ```
/// use salary_engine::models::{HistoricalYear, MonthlyRecord};
/// use rust_decimal::Decimal;
///
/// let year = HistoricalYear {
///     year: 2025,
///     months: vec![MonthlyRecord {
///         month: "Ene".to_string(),
///         basico: Decimal::new(35365592, 2),
///         neto: Decimal::new(161150481, 2),
///     }],
/// };
/// assert_eq!(year.labels(), vec!["Ene"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalYear {
    /// The calendar year.
    pub year: i32,
    /// Monthly records, January first.
    pub months: Vec<MonthlyRecord>,
}

impl HistoricalYear {
    /// Month labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.months.iter().map(|m| m.month.as_str()).collect()
    }

    /// Net figures in order.
    pub fn net_series(&self) -> Vec<Decimal> {
        self.months.iter().map(|m| m.neto).collect()
    }

    /// Básico figures in order.
    pub fn basico_series(&self) -> Vec<Decimal> {
        self.months.iter().map(|m| m.basico).collect()
    }
}
