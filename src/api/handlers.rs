//! HTTP request handlers for the earnings API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_earnings, calculate_timesheet_earnings};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{EarningsCalculation, PayPeriod, TimesheetEntry, WorkPeriod};

use super::request::{BatchEarningsRequest, EarningsRequest};
use super::response::{ApiError, ApiErrorResponse, BatchEarningsResponse, BatchItemResult};
use super::state::AppState;

/// Maximum number of requests accepted in one batch.
pub const MAX_BATCH_SIZE: usize = 500;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/earnings", post(earnings_handler))
        .route("/earnings/batch", post(batch_earnings_handler))
        .route("/config", get(config_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: EngineError) -> Response {
    ApiErrorResponse::from(error).into_response()
}

/// Maps a serde decoding message to an API error.
fn decode_error(message: String) -> ApiError {
    if message.contains("missing field") {
        ApiError::validation_error(message)
    } else {
        ApiError::malformed_json(message)
    }
}

/// Turns a JSON extraction failure into an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            decode_error(body_text)
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
    }
}

/// Handler for POST /earnings.
async fn earnings_handler(
    State(state): State<AppState>,
    payload: Result<Json<EarningsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing earnings request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                rejection_error(rejection, correlation_id),
            );
        }
    };

    match perform_calculation(request, state.config()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %calculation.employee_id,
                total_earnings = %calculation.earnings.total_earnings,
                overtime = calculation.earnings.has_overtime(),
                undertime = calculation.earnings.has_undertime(),
                warnings = calculation.audit_trace.warnings.len(),
                duration_us = calculation.audit_trace.duration_us,
                "Earnings calculated"
            );
            json_response(StatusCode::OK, calculation)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Earnings calculation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /earnings/batch.
///
/// Items are decoded and calculated independently; a failing item carries
/// its own error and does not fail the batch. Only a body that is not a
/// `{ "requests": [...] }` object, or one over [`MAX_BATCH_SIZE`], is
/// rejected as a whole.
async fn batch_earnings_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchEarningsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let batch = match payload {
        Ok(Json(batch)) => batch,
        Err(rejection) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                rejection_error(rejection, correlation_id),
            );
        }
    };

    info!(
        correlation_id = %correlation_id,
        batch_size = batch.requests.len(),
        "Processing batch earnings request"
    );

    if batch.requests.len() > MAX_BATCH_SIZE {
        warn!(
            correlation_id = %correlation_id,
            batch_size = batch.requests.len(),
            "Batch too large"
        );
        return json_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!(
                "batch of {} requests exceeds the limit of {}",
                batch.requests.len(),
                MAX_BATCH_SIZE
            )),
        );
    }

    let config = state.config();
    let results: Vec<BatchItemResult> = batch
        .requests
        .into_iter()
        .map(|item| {
            let employee_id = item
                .get("employee_id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let request = match serde_json::from_value::<EarningsRequest>(item) {
                Ok(request) => request,
                Err(err) => {
                    debug!(
                        correlation_id = %correlation_id,
                        employee_id = %employee_id,
                        error = %err,
                        "Batch item could not be decoded"
                    );
                    return BatchItemResult {
                        employee_id,
                        calculation: None,
                        error: Some(decode_error(err.to_string())),
                    };
                }
            };
            match perform_calculation(request, config) {
                Ok(calculation) => BatchItemResult {
                    employee_id,
                    calculation: Some(calculation),
                    error: None,
                },
                Err(err) => {
                    debug!(
                        correlation_id = %correlation_id,
                        employee_id = %employee_id,
                        error = %err,
                        "Batch item failed"
                    );
                    let api_error: ApiErrorResponse = err.into();
                    BatchItemResult {
                        employee_id,
                        calculation: None,
                        error: Some(api_error.error),
                    }
                }
            }
        })
        .collect();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    info!(
        correlation_id = %correlation_id,
        succeeded = results.len() - failed,
        failed,
        "Batch earnings completed"
    );

    json_response(StatusCode::OK, BatchEarningsResponse { results })
}

/// Handler for GET /config.
async fn config_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().config())
}

/// Resolves the salary basis and worked time for a request and calculates earnings.
fn perform_calculation(
    request: EarningsRequest,
    config: &ConfigLoader,
) -> EngineResult<EarningsCalculation> {
    let salary = request.salary;
    let basis = config.salary_basis(
        salary.monthly_salary_amount,
        salary.standard_monthly_hours,
        salary.overtime_multiplier,
        salary.apply_undertime_deductions,
    );
    let pay_period: Option<PayPeriod> = request.pay_period.map(Into::into);

    match (request.total_minutes_worked, request.timesheet) {
        (Some(minutes), None) => calculate_earnings(
            &request.employee_id,
            &WorkPeriod::new(minutes),
            &basis,
            pay_period.as_ref(),
        ),
        (None, Some(timesheet)) => {
            let entries: Vec<TimesheetEntry> = timesheet.into_iter().map(Into::into).collect();
            calculate_timesheet_earnings(
                &request.employee_id,
                &entries,
                &basis,
                pay_period.as_ref(),
            )
        }
        (Some(_), Some(_)) => Err(EngineError::invalid_input(
            "total_minutes_worked",
            "give either total_minutes_worked or timesheet, not both",
        )),
        (None, None) => Err(EngineError::invalid_input(
            "total_minutes_worked",
            "one of total_minutes_worked or timesheet is required",
        )),
    }
}
