//! Deductions.
//!
//! Jubilación and obra social are percentages of the remunerative subtotal
//! only; non-remunerative pay never contributes. Seguro de vida is a flat
//! amount.

use rust_decimal::Decimal;

use crate::config::CalcConstants;
use crate::models::DeductionItems;

/// Computes the three deductions.
///
/// # Arguments
///
/// * `subtotal_remunerativo` - Sum of the remunerative items
/// * `seguro_vida` - Flat life-insurance deduction
/// * `constants` - The published percentages
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_deductions;
/// use salary_engine::config::CalcConstants;
/// use rust_decimal::Decimal;
///
/// let deductions = calculate_deductions(
///     Decimal::new(100000, 0),
///     Decimal::new(1500, 0),
///     &CalcConstants::default(),
/// );
/// assert_eq!(deductions.jubilacion, Decimal::new(14000, 0));
/// assert_eq!(deductions.obra_social, Decimal::new(3000, 0));
/// assert_eq!(deductions.total(), Decimal::new(18500, 0));
/// ```
pub fn calculate_deductions(
    subtotal_remunerativo: Decimal,
    seguro_vida: Decimal,
    constants: &CalcConstants,
) -> DeductionItems {
    DeductionItems {
        jubilacion: subtotal_remunerativo.saturating_mul(constants.jubilacion),
        obra_social: subtotal_remunerativo.saturating_mul(constants.obra_social),
        seguro_vida,
    }
}
