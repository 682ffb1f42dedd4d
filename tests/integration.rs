//! Integration tests for the HR admin engine.
//!
//! This test suite drives the HTTP router end to end:
//! - Payroll breakdown (PF included / excluded, rounding, clamping)
//! - Salary absent or non-positive
//! - Route gate middleware redirects and pass-through
//! - Gate decision endpoint
//! - Error cases

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    Router,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

use hr_admin_engine::api::{create_router, AppState};
use hr_admin_engine::calculation::compute_breakdown;
use hr_admin_engine::config::{ConfigLoader, GatePolicy, PayrollPolicy};
use hr_admin_engine::gate::{RouteGate, SessionKind, SessionValidator};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/hr").expect("Failed to load config");
    AppState::new(config).expect("Failed to build state")
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_raw(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Sends a GET with an optional Cookie header and returns status and Location.
async fn get_page(router: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Option<String>) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let response = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());

    (response.status(), location)
}

fn breakdown_request(annual_salary: Value, include_provident_fund: bool) -> Value {
    json!({
        "annual_salary": annual_salary,
        "include_provident_fund": include_provident_fund
    })
}

fn assert_amount(result: &Value, field: &str, expected: &str) {
    let actual = result["breakdown"][field]
        .as_str()
        .unwrap_or_else(|| panic!("breakdown.{} missing in {}", field, result));
    assert_eq!(
        actual, expected,
        "Expected {} = {}, got {}",
        field, expected, actual
    );
}

// =============================================================================
// Payroll breakdown
// =============================================================================

#[tokio::test]
async fn test_breakdown_with_provident_fund() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!(1_200_000), true),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["computed"], true);
    assert_amount(&result, "monthly_salary", "100000");
    assert_amount(&result, "basic", "40000");
    assert_amount(&result, "hra", "20000");
    assert_amount(&result, "da", "4000");
    assert_amount(&result, "medical_allowance", "1250");
    assert_amount(&result, "transport", "1600");
    assert_amount(&result, "provident_fund", "4800");
    assert_amount(&result, "special_allowance", "28350");
    assert_eq!(result["breakdown"]["special_allowance_clamped"], false);
}

#[tokio::test]
async fn test_breakdown_without_provident_fund_keeps_deduction() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!("1200000"), false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "provident_fund", "0");
    assert_amount(&result, "special_allowance", "28350");

    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "PROVIDENT_FUND_WITHHELD");
}

#[tokio::test]
async fn test_breakdown_includes_annual_view() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!(1_200_000), true),
    )
    .await;

    assert_eq!(result["annual"]["basic"], "480000");
    assert_eq!(result["annual"]["total"], "1200000");
}

#[tokio::test]
async fn test_breakdown_audit_trace_has_seven_steps() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!(500_000), true),
    )
    .await;

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0]["rule_id"], "monthly_salary");
    assert_eq!(steps[6]["rule_id"], "special_allowance");
    assert_amount(&result, "special_allowance", "10149");
}

#[tokio::test]
async fn test_breakdown_low_salary_is_clamped_and_flagged() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!(60_000), true),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "special_allowance", "0");
    assert_eq!(result["breakdown"]["special_allowance_clamped"], true);
    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w["code"] == "SPECIAL_ALLOWANCE_CLAMPED"));
}

#[tokio::test]
async fn test_breakdown_zero_salary_computes_nothing() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!(0), true),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["computed"], false);
    assert!(result["breakdown"].is_null());
    assert!(result["annual"].is_null());
    assert!(result["audit_trace"].is_null());
}

#[tokio::test]
async fn test_breakdown_null_salary_computes_nothing() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(Value::Null, false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["computed"], false);
}

#[tokio::test]
async fn test_breakdown_negative_salary_computes_nothing() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!(-50_000), true),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["computed"], false);
}

#[tokio::test]
async fn test_breakdown_response_has_id_and_timestamp() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        breakdown_request(json!(360_000), true),
    )
    .await;

    assert!(result["calculation_id"].as_str().unwrap().len() == 36);
    assert!(result["calculated_at"].is_string());
    assert_amount(&result, "special_allowance", "6510");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_breakdown_missing_flag_is_validation_error() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        json!({ "annual_salary": 1_200_000 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(
        result["message"]
            .as_str()
            .unwrap()
            .contains("include_provident_fund")
    );
}

#[tokio::test]
async fn test_breakdown_malformed_json() {
    let (status, result) = post_raw(
        create_router_for_test(),
        "/api/payroll/breakdown",
        "{not json",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_breakdown_wrong_type_is_malformed() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/payroll/breakdown",
        json!({ "annual_salary": 1_200_000, "include_provident_fund": "yes" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_gate_decision_rejects_relative_path() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/gate/decision",
        json!({ "path": "dashboard" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_unknown_api_route_is_not_found() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Gate decision endpoint
// =============================================================================

#[tokio::test]
async fn test_gate_decision_anonymous_dashboard() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/api/gate/decision",
        json!({ "path": "/dashboard" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result,
        json!({ "decision": "redirect", "location": "/login?redirect=%2Fdashboard" })
    );
}

#[tokio::test]
async fn test_gate_decision_admin_on_login() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/api/gate/decision",
        json!({ "path": "/login", "admin_session_id": "admin-123" }),
    )
    .await;

    assert_eq!(result, json!({ "decision": "redirect", "location": "/dashboard" }));
}

#[tokio::test]
async fn test_gate_decision_employee_on_login() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/api/gate/decision",
        json!({ "path": "/login", "employee_session_id": "emp-456" }),
    )
    .await;

    assert_eq!(
        result,
        json!({ "decision": "redirect", "location": "/employee-dashboard" })
    );
}

#[tokio::test]
async fn test_gate_decision_public_route() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/api/gate/decision",
        json!({ "path": "/candidate/enquiry" }),
    )
    .await;

    assert_eq!(result, json!({ "decision": "allow" }));
}

#[tokio::test]
async fn test_gate_decision_protected_with_admin() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/api/gate/decision",
        json!({ "path": "/employees/42", "admin_session_id": "admin-123" }),
    )
    .await;

    assert_eq!(result, json!({ "decision": "allow" }));
}

// =============================================================================
// Route gate middleware
// =============================================================================

#[tokio::test]
async fn test_middleware_redirects_anonymous_protected_page() {
    let (status, location) = get_page(create_router_for_test(), "/dashboard", None).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/login?redirect=%2Fdashboard"));
}

#[tokio::test]
async fn test_middleware_redirect_ignores_query_string() {
    let (status, location) =
        get_page(create_router_for_test(), "/employees/42?tab=documents", None).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(
        location.as_deref(),
        Some("/login?redirect=%2Femployees%2F42")
    );
}

#[tokio::test]
async fn test_middleware_sends_admin_away_from_login() {
    let (status, location) = get_page(
        create_router_for_test(),
        "/login",
        Some("theme=dark; admin_session_id=admin-123"),
    )
    .await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/dashboard"));
}

#[tokio::test]
async fn test_middleware_sends_employee_away_from_login() {
    let (status, location) = get_page(
        create_router_for_test(),
        "/login",
        Some("employee_session_id=emp-456"),
    )
    .await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/employee-dashboard"));
}

#[tokio::test]
async fn test_middleware_lets_authenticated_request_through() {
    let (status, location) = get_page(
        create_router_for_test(),
        "/employees/42",
        Some("admin_session_id=admin-123"),
    )
    .await;

    // Passed the gate; pages themselves are not served here
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(location, None);
}

#[tokio::test]
async fn test_middleware_treats_empty_cookie_as_anonymous() {
    let (status, location) = get_page(
        create_router_for_test(),
        "/profile",
        Some("admin_session_id=; employee_session_id="),
    )
    .await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/login?redirect=%2Fprofile"));
}

#[tokio::test]
async fn test_middleware_skips_excluded_paths() {
    let (status, location) =
        get_page(create_router_for_test(), "/_next/static/chunks/app.js", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(location, None);
}

#[tokio::test]
async fn test_middleware_reads_session_past_non_utf8_cookie() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/dashboard")
                .header(
                    header::COOKIE,
                    HeaderValue::from_bytes(b"name=Jos\xc3\xa9; admin_session_id=admin-123")
                        .unwrap(),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Passed the gate; pages themselves are not served here
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_middleware_reads_session_from_second_cookie_header() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/dashboard")
                .header(header::COOKIE, HeaderValue::from_bytes(b"theme=\xff").unwrap())
                .header(header::COOKIE, "admin_session_id=admin-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
}

/// Accepts only admin sessions issued with the `admin-` prefix.
struct IssuedAdminSessions;

impl SessionValidator for IssuedAdminSessions {
    fn is_authenticated(&self, kind: SessionKind, session_id: &str) -> bool {
        kind == SessionKind::Admin && session_id.starts_with("admin-")
    }
}

fn create_router_with_issued_sessions() -> Router {
    let config = ConfigLoader::load("./config/hr").expect("Failed to load config");
    let gate = RouteGate::with_validator(&GatePolicy::default(), Arc::new(IssuedAdminSessions))
        .expect("Failed to build gate");
    create_router(AppState::with_gate(config, gate))
}

#[tokio::test]
async fn test_middleware_uses_injected_session_validator() {
    let (status, location) = get_page(
        create_router_with_issued_sessions(),
        "/dashboard",
        Some("admin_session_id=forged"),
    )
    .await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/login?redirect=%2Fdashboard"));

    let (status, location) = get_page(
        create_router_with_issued_sessions(),
        "/dashboard",
        Some("admin_session_id=admin-123"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(location, None);
}

#[tokio::test]
async fn test_health_is_reachable_without_session() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["status"], "ok");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_breakdown_is_deterministic(salary in 1u64..100_000_000, include_pf in any::<bool>()) {
        let policy = PayrollPolicy::default();
        let salary = Some(Decimal::from(salary));

        prop_assert_eq!(
            compute_breakdown(salary, include_pf, &policy),
            compute_breakdown(salary, include_pf, &policy)
        );
    }

    #[test]
    fn prop_components_reconcile_when_not_clamped(salary in 1u64..100_000_000, include_pf in any::<bool>()) {
        let policy = PayrollPolicy::default();
        let b = compute_breakdown(Some(Decimal::from(salary)), include_pf, &policy).unwrap();

        prop_assert!(b.special_allowance >= Decimal::ZERO);
        if b.is_balanced() {
            let withheld = if include_pf {
                Decimal::ZERO
            } else {
                hr_admin_engine::calculation::round_currency(
                    b.basic * policy.rates.provident_fund_of_basic,
                )
            };
            prop_assert_eq!(b.component_total() + withheld, b.monthly_salary);
        }
    }

    #[test]
    fn prop_every_component_is_whole(salary in 1u64..100_000_000) {
        let b = compute_breakdown(Some(Decimal::from(salary)), true, &PayrollPolicy::default()).unwrap();
        for amount in [b.monthly_salary, b.basic, b.hra, b.da, b.provident_fund, b.special_allowance] {
            prop_assert_eq!(amount, amount.trunc());
        }
    }
}
