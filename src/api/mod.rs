//! HTTP API module for the salary engine.
//!
//! This module provides the REST endpoints for computing a salary breakdown
//! and reading the configured constants and historical tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, ConstantsResponse};
pub use state::AppState;
