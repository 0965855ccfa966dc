//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{build_audit_steps, collect_warnings, compute};
use crate::config::CalcConstants;
use crate::models::{AuditTrace, CalculationResult, SalaryInput};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, ConstantsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/constants", get(constants_handler))
        .route("/history/:year", get(history_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Coerces the raw fields, computes the breakdown and returns it with its
/// audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let coerced = request.fields.coerced_fields();
    if !coerced.is_empty() {
        debug!(
            correlation_id = %correlation_id,
            fields = ?coerced,
            "Unreadable fields coerced to zero"
        );
    }

    let input = request.sanitize();
    let result = perform_calculation(input, state.config().constants());

    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        sueldo_neto = %result.breakdown.sueldo_neto,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for GET /constants endpoint.
async fn constants_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    json_response(
        StatusCode::OK,
        ConstantsResponse {
            metadata: config.metadata().clone(),
            constants: *config.constants(),
        },
    )
}

/// Handler for GET /history/:year endpoint.
async fn history_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            warn!(error = %rejection, "Invalid history year");
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_year(rejection.body_text()),
            );
        }
    };

    match state.config().get_history(year) {
        Ok(history) => json_response(StatusCode::OK, history),
        Err(err) => {
            warn!(year, error = %err, "History lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Computes the breakdown and wraps it with its audit trace.
fn perform_calculation(input: SalaryInput, constants: &CalcConstants) -> CalculationResult {
    let start_time = Instant::now();

    let breakdown = compute(&input, constants);
    let steps = build_audit_steps(&input, constants, &breakdown);
    let warnings = collect_warnings(&input);

    CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input,
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
