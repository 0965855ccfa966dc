//! Calculation logic for the salary engine.
//!
//! This module contains the net salary formula chain: the percentage
//! adjustment of the raw figures, the remunerative and non-remunerative
//! items, the deductions, and the composition of all of them into a
//! [`SalaryBreakdown`](crate::models::SalaryBreakdown) by [`compute`]. It also
//! builds the audit trace that explains a computed breakdown.

mod adjustment;
mod audit;
mod deductions;
mod non_remunerative;
mod remunerative;
mod salary;

pub use adjustment::{AdjustedFigures, apply_percentage_adjustment, percentage_multiplier};
pub use audit::{build_audit_steps, collect_warnings};
pub use deductions::calculate_deductions;
pub use non_remunerative::calculate_non_remunerative;
pub use remunerative::calculate_remunerative;
pub use salary::compute;
