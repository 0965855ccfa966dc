//! Non-remunerative items.

use rust_decimal::Decimal;

use crate::config::CalcConstants;
use crate::models::NonRemunerativeItems;

/// Computes the bloqueo de título from the adjusted haber comisario.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_non_remunerative;
/// use salary_engine::config::CalcConstants;
/// use rust_decimal::Decimal;
///
/// let items = calculate_non_remunerative(Decimal::new(1000, 0), &CalcConstants::default());
/// assert_eq!(items.bloqueo_titulo, Decimal::new(700, 0));
/// ```
pub fn calculate_non_remunerative(
    haber_comisario: Decimal,
    constants: &CalcConstants,
) -> NonRemunerativeItems {
    NonRemunerativeItems {
        bloqueo_titulo: haber_comisario.saturating_mul(constants.bloqueo_titulo_factor),
    }
}
