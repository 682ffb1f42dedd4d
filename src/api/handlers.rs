//! HTTP request handlers for the HR admin engine API.
//!
//! This module contains the handler functions for all API endpoints and
//! assembles them into a router with the route gate in front.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_breakdown_with_audit;
use crate::models::{RouteRequest, SalaryInput};

use super::middleware::route_gate_middleware;
use super::request::{BreakdownRequest, GateDecisionRequest};
use super::response::{ApiError, ApiErrorResponse, BreakdownResponse, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// The route gate wraps every route and the fallback, so page paths that
/// reach this service are gated exactly as they would be in front of the
/// web application. `/api` paths are excluded by the default policy.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/payroll/breakdown", post(breakdown_handler))
        .route("/api/gate/decision", post(gate_decision_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            route_gate_middleware,
        ))
        .with_state(state)
}

/// Turns a JSON extractor rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}

/// Handler for GET /api/health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /api/payroll/breakdown.
///
/// A missing or non-positive salary is not an error: the response says
/// nothing was computed so the caller leaves its form fields alone.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input: SalaryInput = request.into();
    let start_time = Instant::now();
    let result = compute_breakdown_with_audit(
        input.annual_salary,
        input.include_provident_fund,
        state.config().payroll(),
    );
    let duration = start_time.elapsed();

    let response = match result {
        Some(result) => {
            info!(
                correlation_id = %correlation_id,
                monthly_salary = %result.breakdown.monthly_salary,
                special_allowance = %result.breakdown.special_allowance,
                warnings = result.audit.warnings.len(),
                duration_us = duration.as_micros(),
                "Breakdown computed"
            );
            BreakdownResponse {
                calculation_id: correlation_id,
                calculated_at: Utc::now(),
                input,
                computed: true,
                annual: Some(result.breakdown.annualised()),
                breakdown: Some(result.breakdown),
                audit_trace: Some(result.audit),
            }
        }
        None => {
            info!(
                correlation_id = %correlation_id,
                "No positive annual salary supplied, nothing computed"
            );
            BreakdownResponse {
                calculation_id: correlation_id,
                calculated_at: Utc::now(),
                input,
                computed: false,
                breakdown: None,
                annual: None,
                audit_trace: None,
            }
        }
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /api/gate/decision.
///
/// Lets a caller that cannot mount the middleware ask for a decision.
async fn gate_decision_handler(
    State(state): State<AppState>,
    payload: Result<Json<GateDecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let route_request = match RouteRequest::try_from(request) {
        Ok(route_request) => route_request,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected gate decision request");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let decision = state.gate().decide_request(&route_request);
    info!(
        correlation_id = %correlation_id,
        path = %route_request.path,
        allow = decision.is_allow(),
        "Gate decision evaluated"
    );

    (StatusCode::OK, Json(decision)).into_response()
}

/// Fallback for anything not routed above.
async fn not_found_handler(uri: Uri) -> Response {
    ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::not_found(uri.path())).into_response()
}
