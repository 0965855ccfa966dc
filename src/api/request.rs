//! Request types for the salary engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::input::RawSalaryInput;
use crate::models::SalaryInput;

/// Request body for the `/calculate` endpoint.
///
/// All fields are optional and may be numbers or strings; they are coerced
/// the way a browser form would read them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The raw salary fields.
    #[serde(flatten)]
    pub fields: RawSalaryInput,
}

impl CalculationRequest {
    /// Coerces the raw fields into a calculation input.
    pub fn sanitize(&self) -> SalaryInput {
        self.fields.sanitize()
    }
}
