//! Coercion of raw form values into a [`SalaryInput`].
//!
//! Callers hand over whatever the form produced: numbers, strings with
//! trailing text, empty strings, nothing at all. Every field ends up as a
//! number; anything that cannot be read as one becomes zero. The rules
//! follow how browsers read numeric form fields: a decimal field takes the
//! longest numeric prefix of the text, and the seniority field takes the
//! leading integer, dropping any fraction. Any magnitude is kept as long as
//! it fits the target type; text that reads as a number too large for a
//! `Decimal` (or an `i64`, for seniority) counts as unreadable.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::SalaryInput;

/// Raw, unvalidated field values as received from a form or JSON body.
///
/// # Example
///
/// ```
/// use salary_engine::input::RawSalaryInput;
/// use serde_json::json;
///
/// let raw: RawSalaryInput = serde_json::from_value(json!({
///     "basico_base": "353655.92",
///     "years_antiguedad": "7.9",
///     "dto277": 80000,
///     "seguro_vida": "",
/// }))
/// .unwrap();
///
/// let input = raw.sanitize();
/// assert_eq!(input.years_antiguedad, 7);
/// assert_eq!(input.dto277.to_string(), "80000");
/// assert!(input.seguro_vida.is_zero());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSalaryInput {
    /// Base salary.
    #[serde(default)]
    pub basico_base: Option<Value>,
    /// Years of seniority.
    #[serde(default)]
    pub years_antiguedad: Option<Value>,
    /// Comisario reference pay.
    #[serde(default)]
    pub haber_comisario_base: Option<Value>,
    /// Decreto 277 amount.
    #[serde(default)]
    pub dto277: Option<Value>,
    /// Life-insurance deduction.
    #[serde(default)]
    pub seguro_vida: Option<Value>,
    /// Percentage adjustment.
    #[serde(default)]
    pub porcentaje_aumento: Option<Value>,
}

impl RawSalaryInput {
    /// Coerces every field, defaulting unreadable ones to zero.
    pub fn sanitize(&self) -> SalaryInput {
        SalaryInput {
            basico_base: coerce_decimal(self.basico_base.as_ref()),
            years_antiguedad: coerce_integer(self.years_antiguedad.as_ref()),
            haber_comisario_base: coerce_decimal(self.haber_comisario_base.as_ref()),
            dto277: coerce_decimal(self.dto277.as_ref()),
            seguro_vida: coerce_decimal(self.seguro_vida.as_ref()),
            porcentaje_aumento: coerce_decimal(self.porcentaje_aumento.as_ref()),
        }
    }

    /// Names of the fields that were present but could not be read as a
    /// number, and so were replaced by zero.
    pub fn coerced_fields(&self) -> Vec<&'static str> {
        let unreadable_decimal =
            |value: &Option<Value>| value.as_ref().is_some_and(|v| read_decimal(v).is_none());

        [
            ("basico_base", unreadable_decimal(&self.basico_base)),
            (
                "years_antiguedad",
                self.years_antiguedad
                    .as_ref()
                    .is_some_and(|v| read_integer(v).is_none()),
            ),
            (
                "haber_comisario_base",
                unreadable_decimal(&self.haber_comisario_base),
            ),
            ("dto277", unreadable_decimal(&self.dto277)),
            ("seguro_vida", unreadable_decimal(&self.seguro_vida)),
            ("porcentaje_aumento", unreadable_decimal(&self.porcentaje_aumento)),
        ]
        .into_iter()
        .filter(|(_, unreadable)| *unreadable)
        .map(|(name, _)| name)
        .collect()
    }
}

fn coerce_decimal(value: Option<&Value>) -> Decimal {
    value.and_then(read_decimal).unwrap_or(Decimal::ZERO)
}

fn coerce_integer(value: Option<&Value>) -> i64 {
    value.and_then(read_integer).unwrap_or(0)
}

fn read_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal_lenient(&n.to_string()),
        Value::String(s) => parse_decimal_lenient(s),
        _ => None,
    }
}

fn read_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => parse_decimal_lenient(&n.to_string()).and_then(|d| d.trunc().to_i64()),
        },
        Value::String(s) => parse_integer_lenient(s),
        _ => None,
    }
}

/// Reads the longest decimal number at the start of `text`.
///
/// Leading whitespace is skipped; an optional sign, digits, an optional
/// fraction and an optional exponent are read; anything after that is
/// ignored. Returns `None` when no digits are found or the value does not
/// fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use salary_engine::input::parse_decimal_lenient;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal_lenient("  12.5abc"), Some(Decimal::new(125, 1)));
/// assert_eq!(parse_decimal_lenient("1e3"), Some(Decimal::new(1000, 0)));
/// assert_eq!(parse_decimal_lenient(".5"), Some(Decimal::new(5, 1)));
/// assert_eq!(parse_decimal_lenient("abc"), None);
/// ```
pub fn parse_decimal_lenient(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    end += count_digits(&bytes[end..]);
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let mantissa_end = end;
    let mut exponent: i64 = 0;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            exponent = text[end + 1..exp_end + exp_digits].parse().ok()?;
        }
    }

    let mantissa = normalize_mantissa(&text[..mantissa_end]);
    let value = Decimal::from_str(&mantissa).ok()?;
    scale_by_power_of_ten(value, exponent)
}

/// Reads the integer at the start of `text`, in base 10.
///
/// Leading whitespace is skipped and an optional sign is read; reading
/// stops at the first non-digit, so `"3.9"` yields 3.
///
/// # Example
///
/// ```
/// use salary_engine::input::parse_integer_lenient;
///
/// assert_eq!(parse_integer_lenient("3.9"), Some(3));
/// assert_eq!(parse_integer_lenient(" -2 years"), Some(-2));
/// assert_eq!(parse_integer_lenient(""), None);
/// ```
pub fn parse_integer_lenient(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign_len..]);

    if digits == 0 {
        return None;
    }

    text[..sign_len + digits].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Makes a numeric prefix acceptable to `Decimal::from_str`: "5." and ".5"
/// become "5" and "0.5", and a leading '+' is dropped.
fn normalize_mantissa(prefix: &str) -> String {
    let (sign, digits) = match prefix.as_bytes().first() {
        Some(b'-') => ("-", &prefix[1..]),
        Some(b'+') => ("", &prefix[1..]),
        _ => ("", prefix),
    };
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    if digits.starts_with('.') {
        format!("{}0{}", sign, digits)
    } else {
        format!("{}{}", sign, digits)
    }
}

const MAX_POWER_OF_TEN: u64 = 28;

/// Applies a decimal exponent in steps of at most 10^28, the largest power
/// of ten a `Decimal` holds. Overflow yields `None`; values below the
/// smallest representable fraction round to zero.
fn scale_by_power_of_ten(value: Decimal, exponent: i64) -> Option<Decimal> {
    let mut scaled = value;
    let mut remaining = exponent.unsigned_abs();

    while remaining > 0 && !scaled.is_zero() {
        let step = remaining.min(MAX_POWER_OF_TEN);
        let factor = Decimal::from_i128_with_scale(10_i128.pow(step as u32), 0);
        scaled = if exponent > 0 {
            scaled.checked_mul(factor)?
        } else {
            // Dividing by a power of ten cannot overflow; anything lost is
            // below the smallest fraction a Decimal holds.
            scaled.checked_div(factor).unwrap_or(Decimal::ZERO)
        };
        remaining -= step;
    }

    Some(scaled)
}
