//! Remunerative items.
//!
//! Every supplement is a published percentage of the adjusted básico,
//! except zona, which is a percentage of básico + antigüedad + título, and
//! dto277, which is a fixed amount carried as-is.

use rust_decimal::Decimal;

use crate::config::CalcConstants;
use crate::models::RemunerativeItems;

/// Computes the seven remunerative items from the adjusted básico.
///
/// # Arguments
///
/// * `basico` - Básico after the percentage adjustment
/// * `years_antiguedad` - Whole years of seniority
/// * `dto277` - The fixed Decreto 277 amount
/// * `constants` - The published percentages
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_remunerative;
/// use salary_engine::config::CalcConstants;
/// use rust_decimal::Decimal;
///
/// let items = calculate_remunerative(
///     Decimal::new(1000, 0),
///     0,
///     Decimal::ZERO,
///     &CalcConstants::default(),
/// );
/// assert_eq!(items.titulo, Decimal::new(350, 0));
/// assert_eq!(items.zona, Decimal::new(1350, 0));
/// ```
pub fn calculate_remunerative(
    basico: Decimal,
    years_antiguedad: i64,
    dto277: Decimal,
    constants: &CalcConstants,
) -> RemunerativeItems {
    let antiguedad = basico
        .saturating_mul(constants.antiguedad_per_year)
        .saturating_mul(Decimal::from(years_antiguedad));
    let titulo = basico.saturating_mul(constants.titulo_ed_superior);
    let zona = basico
        .saturating_add(antiguedad)
        .saturating_add(titulo)
        .saturating_mul(constants.suplemento_zona);
    let dedicacion = basico.saturating_mul(constants.mayor_dedicacion);
    let apoyo = basico.saturating_mul(constants.suplemento_apoyo);

    RemunerativeItems {
        basico,
        antiguedad,
        titulo,
        zona,
        dedicacion,
        dto277,
        apoyo,
    }
}
