//! Core data models for the salary engine.
//!
//! This module contains the input, output and reference-data types used
//! throughout the engine.

mod calculation_result;
mod monthly_record;
mod salary_breakdown;
mod salary_input;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use monthly_record::{HistoricalYear, MONTHS_PER_YEAR, MonthlyRecord};
pub use salary_breakdown::{
    Adjustment, DeductionItems, NonRemunerativeItems, RemunerativeItems, SalaryBreakdown,
};
pub use salary_input::SalaryInput;
