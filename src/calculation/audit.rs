//! Audit trace for a salary breakdown.
//!
//! The steps explain an already-computed [`SalaryBreakdown`]: they read its
//! figures and the constants that produced them, and never run the
//! formulas a second time.

use rust_decimal::Decimal;
use serde_json::json;

use crate::config::CalcConstants;
use crate::models::{AuditStep, AuditWarning, SalaryBreakdown, SalaryInput};

/// Builds one audit step per stage of the formula chain, numbered from 1.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{build_audit_steps, compute};
/// use salary_engine::config::CalcConstants;
/// use salary_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     basico_base: Decimal::new(1000, 0),
///     ..SalaryInput::default()
/// };
/// let constants = CalcConstants::default();
/// let breakdown = compute(&input, &constants);
/// let steps = build_audit_steps(&input, &constants, &breakdown);
///
/// assert_eq!(steps[0].rule_id, "percentage_adjustment");
/// assert_eq!(steps.last().unwrap().rule_id, "sueldo_neto");
/// ```
pub fn build_audit_steps(
    input: &SalaryInput,
    constants: &CalcConstants,
    breakdown: &SalaryBreakdown,
) -> Vec<AuditStep> {
    let r = &breakdown.remunerative;
    let d = &breakdown.deductions;
    let multiplier = breakdown.adjustment.multiplier;
    let haber_comisario = breakdown.adjustment.haber_comisario;

    let mut steps = Vec::with_capacity(14);
    let mut push = |rule_id: &str,
                    rule_name: &str,
                    step_input: serde_json::Value,
                    step_output: serde_json::Value,
                    reasoning: String| {
        steps.push(AuditStep {
            step_number: steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input: step_input,
            output: step_output,
            reasoning,
        });
    };

    push(
        "percentage_adjustment",
        "Aumento Porcentual",
        json!({
            "basico_base": dec_str(input.basico_base),
            "haber_comisario_base": dec_str(input.haber_comisario_base),
            "porcentaje_aumento": dec_str(input.porcentaje_aumento)
        }),
        json!({
            "multiplier": dec_str(multiplier),
            "basico": dec_str(r.basico),
            "haber_comisario": dec_str(haber_comisario)
        }),
        format!(
            "1 + {}% = {}; ${} x {} = ${}; ${} x {} = ${}",
            dec_str(input.porcentaje_aumento),
            dec_str(multiplier),
            dec_str(input.basico_base),
            dec_str(multiplier),
            dec_str(r.basico),
            dec_str(input.haber_comisario_base),
            dec_str(multiplier),
            dec_str(haber_comisario)
        ),
    );

    push(
        "antiguedad",
        "Antigüedad",
        json!({
            "basico": dec_str(r.basico),
            "years_antiguedad": input.years_antiguedad,
            "rate_per_year": dec_str(constants.antiguedad_per_year)
        }),
        json!({ "antiguedad": dec_str(r.antiguedad) }),
        format!(
            "${} x {} x {} years = ${}",
            dec_str(r.basico),
            dec_str(constants.antiguedad_per_year),
            input.years_antiguedad,
            dec_str(r.antiguedad)
        ),
    );

    push(
        "titulo",
        "Título Ed. Superior",
        json!({ "basico": dec_str(r.basico), "rate": dec_str(constants.titulo_ed_superior) }),
        json!({ "titulo": dec_str(r.titulo) }),
        percent_of(r.basico, constants.titulo_ed_superior, r.titulo),
    );

    push(
        "zona",
        "Suplemento Zona",
        json!({
            "basico": dec_str(r.basico),
            "antiguedad": dec_str(r.antiguedad),
            "titulo": dec_str(r.titulo),
            "rate": dec_str(constants.suplemento_zona)
        }),
        json!({ "zona": dec_str(r.zona) }),
        format!(
            "(${} + ${} + ${}) x {} = ${}",
            dec_str(r.basico),
            dec_str(r.antiguedad),
            dec_str(r.titulo),
            dec_str(constants.suplemento_zona),
            dec_str(r.zona)
        ),
    );

    push(
        "dedicacion",
        "Mayor Dedicación",
        json!({ "basico": dec_str(r.basico), "rate": dec_str(constants.mayor_dedicacion) }),
        json!({ "dedicacion": dec_str(r.dedicacion) }),
        percent_of(r.basico, constants.mayor_dedicacion, r.dedicacion),
    );

    push(
        "dto277",
        "Dto. 277",
        json!({ "dto277": dec_str(input.dto277) }),
        json!({ "dto277": dec_str(r.dto277) }),
        format!("Fixed amount ${} carried without adjustment", dec_str(r.dto277)),
    );

    push(
        "apoyo",
        "Suplemento Apoyo",
        json!({ "basico": dec_str(r.basico), "rate": dec_str(constants.suplemento_apoyo) }),
        json!({ "apoyo": dec_str(r.apoyo) }),
        percent_of(r.basico, constants.suplemento_apoyo, r.apoyo),
    );

    push(
        "subtotal_remunerativo",
        "Subtotal Remunerativo",
        json!({
            "basico": dec_str(r.basico),
            "antiguedad": dec_str(r.antiguedad),
            "titulo": dec_str(r.titulo),
            "zona": dec_str(r.zona),
            "dedicacion": dec_str(r.dedicacion),
            "dto277": dec_str(r.dto277),
            "apoyo": dec_str(r.apoyo)
        }),
        json!({ "subtotal_remunerativo": dec_str(breakdown.subtotal_remunerativo) }),
        format!(
            "Sum of 7 remunerative items = ${}",
            dec_str(breakdown.subtotal_remunerativo)
        ),
    );

    push(
        "bloqueo_titulo",
        "Bloqueo de Título",
        json!({
            "haber_comisario": dec_str(haber_comisario),
            "rate": dec_str(constants.bloqueo_titulo_factor)
        }),
        json!({
            "bloqueo_titulo": dec_str(breakdown.non_remunerative.bloqueo_titulo),
            "subtotal_no_remunerativo": dec_str(breakdown.subtotal_no_remunerativo)
        }),
        percent_of(
            haber_comisario,
            constants.bloqueo_titulo_factor,
            breakdown.non_remunerative.bloqueo_titulo,
        ),
    );

    push(
        "jubilacion",
        "Jubilación",
        json!({
            "subtotal_remunerativo": dec_str(breakdown.subtotal_remunerativo),
            "rate": dec_str(constants.jubilacion)
        }),
        json!({ "jubilacion": dec_str(d.jubilacion) }),
        percent_of(breakdown.subtotal_remunerativo, constants.jubilacion, d.jubilacion),
    );

    push(
        "obra_social",
        "Obra Social",
        json!({
            "subtotal_remunerativo": dec_str(breakdown.subtotal_remunerativo),
            "rate": dec_str(constants.obra_social)
        }),
        json!({ "obra_social": dec_str(d.obra_social) }),
        percent_of(breakdown.subtotal_remunerativo, constants.obra_social, d.obra_social),
    );

    push(
        "seguro_vida",
        "Seguro de Vida",
        json!({ "seguro_vida": dec_str(input.seguro_vida) }),
        json!({ "seguro_vida": dec_str(d.seguro_vida) }),
        format!("Flat deduction ${}", dec_str(d.seguro_vida)),
    );

    push(
        "total_descuentos",
        "Total Descuentos",
        json!({
            "jubilacion": dec_str(d.jubilacion),
            "obra_social": dec_str(d.obra_social),
            "seguro_vida": dec_str(d.seguro_vida)
        }),
        json!({ "total_descuentos": dec_str(breakdown.total_descuentos) }),
        format!(
            "${} + ${} + ${} = ${}",
            dec_str(d.jubilacion),
            dec_str(d.obra_social),
            dec_str(d.seguro_vida),
            dec_str(breakdown.total_descuentos)
        ),
    );

    push(
        "sueldo_neto",
        "Sueldo Neto",
        json!({
            "subtotal_remunerativo": dec_str(breakdown.subtotal_remunerativo),
            "subtotal_no_remunerativo": dec_str(breakdown.subtotal_no_remunerativo),
            "total_descuentos": dec_str(breakdown.total_descuentos)
        }),
        json!({ "sueldo_neto": dec_str(breakdown.sueldo_neto) }),
        format!(
            "${} + ${} - ${} = ${}",
            dec_str(breakdown.subtotal_remunerativo),
            dec_str(breakdown.subtotal_no_remunerativo),
            dec_str(breakdown.total_descuentos),
            dec_str(breakdown.sueldo_neto)
        ),
    );

    steps
}

/// Flags inputs outside the nominal domain.
///
/// The calculation still runs on such inputs; the warnings only make the
/// unusual figures visible in the audit trace.
pub fn collect_warnings(input: &SalaryInput) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    let monetary = [
        ("basico_base", input.basico_base),
        ("haber_comisario_base", input.haber_comisario_base),
        ("dto277", input.dto277),
        ("seguro_vida", input.seguro_vida),
    ];
    for (field, value) in monetary {
        if value.is_sign_negative() && !value.is_zero() {
            warnings.push(AuditWarning {
                code: "NEGATIVE_AMOUNT".to_string(),
                message: format!("{} is negative ({})", field, dec_str(value)),
                severity: "medium".to_string(),
            });
        }
    }

    if input.years_antiguedad < 0 {
        warnings.push(AuditWarning {
            code: "NEGATIVE_SENIORITY".to_string(),
            message: format!(
                "years_antiguedad is negative ({})",
                input.years_antiguedad
            ),
            severity: "medium".to_string(),
        });
    }

    if input.porcentaje_aumento <= -Decimal::ONE_HUNDRED {
        warnings.push(AuditWarning {
            code: "ADJUSTMENT_ERASES_BASICO".to_string(),
            message: format!(
                "porcentaje_aumento of {}% zeroes or inverts every básico-derived item",
                dec_str(input.porcentaje_aumento)
            ),
            severity: "high".to_string(),
        });
    }

    warnings
}

fn dec_str(value: Decimal) -> String {
    value.normalize().to_string()
}

fn percent_of(base: Decimal, rate: Decimal, result: Decimal) -> String {
    format!("${} x {} = ${}", dec_str(base), dec_str(rate), dec_str(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;
    use rust_decimal_macros::dec;

    fn steps_for(input: &SalaryInput) -> Vec<AuditStep> {
        let constants = CalcConstants::default();
        let breakdown = compute(input, &constants);
        build_audit_steps(input, &constants, &breakdown)
    }

    fn reference_input() -> SalaryInput {
        SalaryInput {
            basico_base: dec!(353655.92),
            ..SalaryInput::default()
        }
    }

    fn step<'a>(steps: &'a [AuditStep], rule_id: &str) -> &'a AuditStep {
        steps
            .iter()
            .find(|s| s.rule_id == rule_id)
            .unwrap_or_else(|| panic!("missing step {}", rule_id))
    }

    #[test]
    fn test_one_step_per_stage_in_order() {
        let steps = steps_for(&reference_input());
        let ids: Vec<&str> = steps.iter().map(|s| s.rule_id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "percentage_adjustment",
                "antiguedad",
                "titulo",
                "zona",
                "dedicacion",
                "dto277",
                "apoyo",
                "subtotal_remunerativo",
                "bloqueo_titulo",
                "jubilacion",
                "obra_social",
                "seguro_vida",
                "total_descuentos",
                "sueldo_neto",
            ]
        );
    }

    #[test]
    fn test_step_numbers_are_sequential_from_one() {
        let steps = steps_for(&reference_input());

        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_titulo_reasoning_explains_calculation() {
        let steps = steps_for(&reference_input());
        let titulo = step(&steps, "titulo");

        assert_eq!(titulo.reasoning, "$353655.92 x 0.35 = $123779.572");
        assert_eq!(titulo.output["titulo"].as_str().unwrap(), "123779.572");
        assert_eq!(titulo.input["rate"].as_str().unwrap(), "0.35");
    }

    #[test]
    fn test_net_step_reports_identity() {
        let steps = steps_for(&reference_input());
        let neto = step(&steps, "sueldo_neto");

        assert_eq!(
            neto.reasoning,
            "$1288686.806888 + $0 - $219076.75717096 = $1069610.04971704"
        );
        assert_eq!(neto.output["sueldo_neto"].as_str().unwrap(), "1069610.04971704");
    }

    #[test]
    fn test_adjustment_step_shows_multiplier() {
        let input = SalaryInput {
            porcentaje_aumento: dec!(10),
            ..reference_input()
        };
        let steps = steps_for(&input);
        let adjustment = step(&steps, "percentage_adjustment");

        assert_eq!(adjustment.output["multiplier"].as_str().unwrap(), "1.1");
        assert_eq!(adjustment.output["basico"].as_str().unwrap(), "389021.512");
        assert!(adjustment.reasoning.starts_with("1 + 10% = 1.1"));
    }

    #[test]
    fn test_antiguedad_step_records_years() {
        let input = SalaryInput {
            years_antiguedad: 8,
            ..reference_input()
        };
        let steps = steps_for(&input);
        let antiguedad = step(&steps, "antiguedad");

        assert_eq!(antiguedad.input["years_antiguedad"].as_i64().unwrap(), 8);
        assert!(antiguedad.reasoning.contains("x 8 years"));
    }

    #[test]
    fn test_no_warnings_for_nominal_input() {
        assert!(collect_warnings(&reference_input()).is_empty());
        assert!(collect_warnings(&SalaryInput::default()).is_empty());
    }

    #[test]
    fn test_warns_on_negative_amounts_and_seniority() {
        let input = SalaryInput {
            seguro_vida: dec!(-10),
            years_antiguedad: -2,
            ..reference_input()
        };
        let warnings = collect_warnings(&input);
        let codes: Vec<&str> = warnings.iter().map(|w| w.code.as_str()).collect();

        assert_eq!(codes, vec!["NEGATIVE_AMOUNT", "NEGATIVE_SENIORITY"]);
        assert!(warnings[0].message.contains("seguro_vida"));
    }

    #[test]
    fn test_warns_when_adjustment_erases_basico() {
        let input = SalaryInput {
            porcentaje_aumento: dec!(-100),
            ..reference_input()
        };
        let warnings = collect_warnings(&input);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "ADJUSTMENT_ERASES_BASICO");
        assert_eq!(warnings[0].severity, "high");
    }
}
