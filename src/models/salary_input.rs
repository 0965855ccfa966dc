//! Salary input model.
//!
//! [`SalaryInput`] is the already-sanitized set of figures the calculator
//! works from. Coercion of raw form values happens in [`crate::input`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The numeric inputs to a single salary calculation.
///
/// Every field defaults to zero. Values are used as given: the engine does
/// not reject negative figures.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = SalaryInput {
///     basico_base: Decimal::from_str("353655.92").unwrap(),
///     years_antiguedad: 5,
///     ..SalaryInput::default()
/// };
/// assert_eq!(input.dto277, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Base salary before the percentage adjustment.
    #[serde(default)]
    pub basico_base: Decimal,
    /// Whole years of seniority.
    #[serde(default)]
    pub years_antiguedad: i64,
    /// Reference pay of a comisario, before the percentage adjustment.
    #[serde(default)]
    pub haber_comisario_base: Decimal,
    /// Fixed Decreto 277 amount, never scaled.
    #[serde(default)]
    pub dto277: Decimal,
    /// Flat life-insurance deduction, never scaled.
    #[serde(default)]
    pub seguro_vida: Decimal,
    /// Percentage adjustment; `10` means +10%.
    #[serde(default)]
    pub porcentaje_aumento: Decimal,
}

impl SalaryInput {
    /// Returns true if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_all_zero() {
        let input = SalaryInput::default();
        assert!(input.is_zero());
        assert_eq!(input.years_antiguedad, 0);
        assert_eq!(input.porcentaje_aumento, Decimal::ZERO);
    }

    #[test]
    fn test_is_zero_false_when_any_field_set() {
        let input = SalaryInput {
            seguro_vida: dec!(1500),
            ..SalaryInput::default()
        };
        assert!(!input.is_zero());
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_zero() {
        let input: SalaryInput = serde_json::from_str(r#"{"basico_base": "1000.50"}"#).unwrap();
        assert_eq!(input.basico_base, dec!(1000.50));
        assert_eq!(input.haber_comisario_base, Decimal::ZERO);
        assert_eq!(input.years_antiguedad, 0);
    }

    #[test]
    fn test_serialize_uses_decimal_strings() {
        let input = SalaryInput {
            basico_base: dec!(353655.92),
            years_antiguedad: 3,
            ..SalaryInput::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"basico_base\":\"353655.92\""));
        assert!(json.contains("\"years_antiguedad\":3"));
    }
}
