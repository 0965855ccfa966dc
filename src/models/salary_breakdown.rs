//! Salary breakdown models.
//!
//! This module contains [`SalaryBreakdown`] and the item groups it is made
//! of. Group totals are computed by the groups themselves so that every
//! subtotal is, by construction, the exact sum of its items, clamped to the
//! `Decimal` range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of applying the percentage adjustment to the raw figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// `1 + porcentaje_aumento / 100`.
    pub multiplier: Decimal,
    /// The comisario reference pay after scaling.
    pub haber_comisario: Decimal,
}

/// Remunerative (pension-contributing) items.
///
/// # Example
///
/// ```
/// use salary_engine::models::RemunerativeItems;
/// use rust_decimal::Decimal;
///
/// let items = RemunerativeItems {
///     basico: Decimal::new(1000, 0),
///     dto277: Decimal::new(80000, 0),
///     ..RemunerativeItems::default()
/// };
/// assert_eq!(items.total(), Decimal::new(81000, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemunerativeItems {
    /// Adjusted base salary.
    pub basico: Decimal,
    /// Seniority supplement.
    pub antiguedad: Decimal,
    /// Higher-education credential supplement.
    pub titulo: Decimal,
    /// Zone supplement.
    pub zona: Decimal,
    /// Mayor dedicación supplement.
    pub dedicacion: Decimal,
    /// Decreto 277 fixed amount.
    pub dto277: Decimal,
    /// Apoyo supplement.
    pub apoyo: Decimal,
}

impl RemunerativeItems {
    /// Sum of the seven remunerative items.
    pub fn total(&self) -> Decimal {
        [
            self.antiguedad,
            self.titulo,
            self.zona,
            self.dedicacion,
            self.dto277,
            self.apoyo,
        ]
        .into_iter()
        .fold(self.basico, Decimal::saturating_add)
    }
}

/// Non-remunerative items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonRemunerativeItems {
    /// Bloqueo de título, derived from the adjusted comisario pay.
    pub bloqueo_titulo: Decimal,
}

impl NonRemunerativeItems {
    /// Sum of the non-remunerative items.
    pub fn total(&self) -> Decimal {
        self.bloqueo_titulo
    }
}

/// Deductions withheld from the gross amount.
///
/// Amounts are positive; they are subtracted when computing the net salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionItems {
    /// Retirement-fund contribution.
    pub jubilacion: Decimal,
    /// Health-insurance contribution.
    pub obra_social: Decimal,
    /// Flat life-insurance deduction.
    pub seguro_vida: Decimal,
}

impl DeductionItems {
    /// Sum of the three deductions.
    pub fn total(&self) -> Decimal {
        self.jubilacion
            .saturating_add(self.obra_social)
            .saturating_add(self.seguro_vida)
    }
}

/// The complete breakdown of a salary calculation.
///
/// Produced by [`crate::calculation::compute`]; never constructed from
/// independent figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Multiplier and scaled comisario pay.
    pub adjustment: Adjustment,
    /// Remunerative items.
    pub remunerative: RemunerativeItems,
    /// Non-remunerative items.
    pub non_remunerative: NonRemunerativeItems,
    /// Deductions.
    pub deductions: DeductionItems,
    /// Sum of the remunerative items.
    pub subtotal_remunerativo: Decimal,
    /// Sum of the non-remunerative items.
    pub subtotal_no_remunerativo: Decimal,
    /// Sum of the deductions.
    pub total_descuentos: Decimal,
    /// Net salary.
    pub sueldo_neto: Decimal,
}
