//! Percentage adjustment.
//!
//! A raise (or cut) expressed as a percentage scales the two raw pay
//! figures, básico and haber comisario. Dto. 277 and seguro de vida are
//! never scaled.

use rust_decimal::Decimal;

use crate::models::{Adjustment, SalaryInput};

/// The raw figures after applying the percentage adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustedFigures {
    /// `1 + porcentaje_aumento / 100`.
    pub multiplier: Decimal,
    /// Adjusted básico.
    pub basico: Decimal,
    /// Adjusted haber comisario.
    pub haber_comisario: Decimal,
}

impl AdjustedFigures {
    /// The part of the adjustment reported in a breakdown.
    pub fn adjustment(&self) -> Adjustment {
        Adjustment {
            multiplier: self.multiplier,
            haber_comisario: self.haber_comisario,
        }
    }
}

/// Converts a percentage into a multiplier: `10` becomes `1.1`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::percentage_multiplier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percentage_multiplier(Decimal::new(10, 0)), Decimal::new(11, 1));
/// assert_eq!(percentage_multiplier(Decimal::new(-100, 0)), Decimal::ZERO);
/// ```
pub fn percentage_multiplier(porcentaje_aumento: Decimal) -> Decimal {
    Decimal::ONE.saturating_add(porcentaje_aumento / Decimal::ONE_HUNDRED)
}

/// Scales básico and haber comisario by the input's percentage adjustment.
pub fn apply_percentage_adjustment(input: &SalaryInput) -> AdjustedFigures {
    let multiplier = percentage_multiplier(input.porcentaje_aumento);

    AdjustedFigures {
        multiplier,
        basico: input.basico_base.saturating_mul(multiplier),
        haber_comisario: input.haber_comisario_base.saturating_mul(multiplier),
    }
}
