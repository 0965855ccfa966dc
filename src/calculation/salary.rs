//! The net salary formula chain.
//!
//! [`compute`] runs the stages in their fixed order: percentage adjustment,
//! remunerative items, non-remunerative items, deductions, net. It is pure
//! and total; no intermediate value is rounded. Every operation saturates at
//! `Decimal::MAX` / `Decimal::MIN` instead of overflowing, so figures beyond
//! the `Decimal` range are clamped rather than panicking.

use crate::config::CalcConstants;
use crate::models::{SalaryBreakdown, SalaryInput};

use super::adjustment::apply_percentage_adjustment;
use super::deductions::calculate_deductions;
use super::non_remunerative::calculate_non_remunerative;
use super::remunerative::calculate_remunerative;

/// Computes the full salary breakdown for one set of inputs.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute;
/// use salary_engine::config::CalcConstants;
/// use salary_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = SalaryInput {
///     basico_base: Decimal::from_str("353655.92").unwrap(),
///     ..SalaryInput::default()
/// };
/// let breakdown = compute(&input, &CalcConstants::default());
///
/// assert_eq!(breakdown.sueldo_neto, Decimal::from_str("1069610.04971704").unwrap());
/// assert_eq!(
///     breakdown.sueldo_neto,
///     breakdown.subtotal_remunerativo + breakdown.subtotal_no_remunerativo
///         - breakdown.total_descuentos
/// );
/// ```
pub fn compute(input: &SalaryInput, constants: &CalcConstants) -> SalaryBreakdown {
    let adjusted = apply_percentage_adjustment(input);

    let remunerative = calculate_remunerative(
        adjusted.basico,
        input.years_antiguedad,
        input.dto277,
        constants,
    );
    let subtotal_remunerativo = remunerative.total();

    let non_remunerative = calculate_non_remunerative(adjusted.haber_comisario, constants);
    let subtotal_no_remunerativo = non_remunerative.total();

    let deductions = calculate_deductions(subtotal_remunerativo, input.seguro_vida, constants);
    let total_descuentos = deductions.total();

    SalaryBreakdown {
        adjustment: adjusted.adjustment(),
        remunerative,
        non_remunerative,
        deductions,
        subtotal_remunerativo,
        subtotal_no_remunerativo,
        total_descuentos,
        sueldo_neto: subtotal_remunerativo
            .saturating_add(subtotal_no_remunerativo)
            .saturating_sub(total_descuentos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn constants() -> CalcConstants {
        CalcConstants::default()
    }

    fn full_input() -> SalaryInput {
        SalaryInput {
            basico_base: dec!(447660.48),
            years_antiguedad: 12,
            haber_comisario_base: dec!(812345.67),
            dto277: dec!(80000),
            seguro_vida: dec!(2500),
            porcentaje_aumento: dec!(0),
        }
    }

    #[test]
    fn test_all_zero_input_gives_all_zero_breakdown() {
        let breakdown = compute(&SalaryInput::default(), &constants());

        assert_eq!(breakdown.remunerative.total(), Decimal::ZERO);
        assert_eq!(breakdown.non_remunerative.bloqueo_titulo, Decimal::ZERO);
        assert_eq!(breakdown.deductions.total(), Decimal::ZERO);
        assert_eq!(breakdown.adjustment.haber_comisario, Decimal::ZERO);
        assert_eq!(breakdown.subtotal_remunerativo, Decimal::ZERO);
        assert_eq!(breakdown.subtotal_no_remunerativo, Decimal::ZERO);
        assert_eq!(breakdown.total_descuentos, Decimal::ZERO);
        assert_eq!(breakdown.sueldo_neto, Decimal::ZERO);
    }

    #[test]
    fn test_reference_basico_breakdown() {
        let input = SalaryInput {
            basico_base: dec!(353655.92),
            ..SalaryInput::default()
        };
        let b = compute(&input, &constants());

        assert_eq!(b.remunerative.basico, dec!(353655.92));
        assert_eq!(b.remunerative.antiguedad, Decimal::ZERO);
        assert_eq!(b.remunerative.titulo, dec!(123779.572));
        assert_eq!(b.remunerative.zona, dec!(477435.492));
        assert_eq!(b.remunerative.dedicacion, dec!(157093.959664));
        assert_eq!(b.remunerative.apoyo, dec!(176721.863224));
        assert_eq!(b.subtotal_remunerativo, dec!(1288686.806888));
        assert_eq!(b.deductions.jubilacion, dec!(180416.15296432));
        assert_eq!(b.deductions.obra_social, dec!(38660.60420664));
        assert_eq!(b.total_descuentos, dec!(219076.75717096));
        assert_eq!(b.sueldo_neto, dec!(1069610.04971704));
    }

    #[test]
    fn test_full_input_identities_hold_exactly() {
        let b = compute(&full_input(), &constants());
        let r = &b.remunerative;

        assert_eq!(
            b.subtotal_remunerativo,
            r.basico + r.antiguedad + r.titulo + r.zona + r.dedicacion + r.dto277 + r.apoyo
        );
        assert_eq!(
            b.total_descuentos,
            b.deductions.jubilacion + b.deductions.obra_social + b.deductions.seguro_vida
        );
        assert_eq!(
            b.sueldo_neto,
            b.subtotal_remunerativo + b.subtotal_no_remunerativo - b.total_descuentos
        );
    }

    #[test]
    fn test_full_input_values() {
        let b = compute(&full_input(), &constants());

        // 447660.48 x 0.02 x 12
        assert_eq!(b.remunerative.antiguedad, dec!(107438.5152));
        assert_eq!(b.non_remunerative.bloqueo_titulo, dec!(568641.969));
        assert_eq!(b.subtotal_no_remunerativo, dec!(568641.969));
        assert_eq!(b.deductions.seguro_vida, dec!(2500));
    }

    #[test]
    fn test_deductions_ignore_non_remunerative_pay() {
        let without = compute(
            &SalaryInput {
                haber_comisario_base: Decimal::ZERO,
                ..full_input()
            },
            &constants(),
        );
        let with = compute(&full_input(), &constants());

        assert_eq!(with.deductions, without.deductions);
        assert_eq!(
            with.sueldo_neto - without.sueldo_neto,
            with.non_remunerative.bloqueo_titulo
        );
    }

    #[test]
    fn test_percentage_scales_basico_and_comisario_only() {
        let base = compute(&full_input(), &constants());
        let raised = compute(
            &SalaryInput {
                porcentaje_aumento: dec!(10),
                ..full_input()
            },
            &constants(),
        );

        assert_eq!(raised.remunerative.basico, base.remunerative.basico * dec!(1.1));
        assert_eq!(
            raised.adjustment.haber_comisario,
            base.adjustment.haber_comisario * dec!(1.1)
        );
        assert_eq!(raised.remunerative.dto277, base.remunerative.dto277);
        assert_eq!(raised.deductions.seguro_vida, base.deductions.seguro_vida);
    }

    #[test]
    fn test_minus_one_hundred_percent_collapses_basico_derived_items() {
        let b = compute(
            &SalaryInput {
                porcentaje_aumento: dec!(-100),
                ..full_input()
            },
            &constants(),
        );

        assert_eq!(b.remunerative.basico, Decimal::ZERO);
        assert_eq!(b.adjustment.haber_comisario, Decimal::ZERO);
        assert_eq!(b.remunerative.antiguedad, Decimal::ZERO);
        assert_eq!(b.remunerative.titulo, Decimal::ZERO);
        assert_eq!(b.remunerative.zona, Decimal::ZERO);
        assert_eq!(b.remunerative.dedicacion, Decimal::ZERO);
        assert_eq!(b.remunerative.apoyo, Decimal::ZERO);
        assert_eq!(b.non_remunerative.bloqueo_titulo, Decimal::ZERO);
        assert_eq!(b.remunerative.dto277, dec!(80000));
        assert_eq!(b.deductions.seguro_vida, dec!(2500));
        // 80000 - 80000 x 0.17 - 2500
        assert_eq!(b.sueldo_neto, dec!(63900));
    }

    #[test]
    fn test_negative_inputs_are_computed_not_rejected() {
        let b = compute(
            &SalaryInput {
                basico_base: dec!(-1000),
                years_antiguedad: -1,
                ..SalaryInput::default()
            },
            &constants(),
        );

        assert_eq!(b.remunerative.antiguedad, dec!(20));
        assert!(b.sueldo_neto < Decimal::ZERO);
    }

    #[test]
    fn test_figures_beyond_decimal_range_saturate() {
        let b = compute(
            &SalaryInput {
                basico_base: Decimal::MAX / dec!(2),
                years_antiguedad: i64::MAX,
                haber_comisario_base: Decimal::MAX,
                porcentaje_aumento: dec!(100),
                ..SalaryInput::default()
            },
            &constants(),
        );

        assert_eq!(b.adjustment.haber_comisario, Decimal::MAX);
        assert_eq!(b.remunerative.antiguedad, Decimal::MAX);
        assert_eq!(b.remunerative.zona, Decimal::MAX);
        assert_eq!(b.subtotal_remunerativo, Decimal::MAX);
        assert_eq!(b.subtotal_no_remunerativo, b.non_remunerative.bloqueo_titulo);
        assert!(b.sueldo_neto > Decimal::ZERO);
    }

    #[test]
    fn test_figures_below_decimal_range_saturate() {
        let b = compute(
            &SalaryInput {
                basico_base: Decimal::MIN,
                seguro_vida: Decimal::MAX,
                porcentaje_aumento: dec!(100),
                ..SalaryInput::default()
            },
            &constants(),
        );

        assert_eq!(b.remunerative.basico, Decimal::MIN);
        assert_eq!(b.subtotal_remunerativo, Decimal::MIN);
        assert_eq!(b.sueldo_neto, Decimal::MIN);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let input = full_input();
        assert_eq!(compute(&input, &constants()), compute(&input, &constants()));
    }
}
