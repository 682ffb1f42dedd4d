//! Route gate middleware.

use std::borrow::Cow;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::gate::find_cookie;

use super::state::AppState;

/// Runs the route gate ahead of every request.
///
/// Session identifiers are read from the cookies named in the gate policy.
/// Each `Cookie` header is decoded lossily, so a non-UTF-8 byte in one pair
/// never hides the other pairs of the same header. A redirect decision is
/// answered with `302 Found` and a `Location` header; otherwise the request
/// continues untouched.
pub async fn route_gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let cookie_names = &state.config().gate().cookies;
        let cookie_headers: Vec<Cow<'_, str>> = request
            .headers()
            .get_all(header::COOKIE)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .collect();

        let admin = find_cookie(
            cookie_headers.iter().map(|value| &**value),
            &cookie_names.admin,
        );
        let employee = find_cookie(
            cookie_headers.iter().map(|value| &**value),
            &cookie_names.employee,
        );

        state
            .gate()
            .decide(request.uri().path(), admin.as_deref(), employee.as_deref())
    };

    match decision.location() {
        None => next.run(request).await,
        Some(location) => {
            info!(
                path = %request.uri().path(),
                location = %location,
                "Route gate redirect"
            );
            (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
        }
    }
}
