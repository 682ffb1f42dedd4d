//! HTTP API module for the HR admin engine.
//!
//! This module provides the REST endpoints for the payroll breakdown and
//! the route gate, and the middleware that applies the gate to every
//! inbound request.

mod handlers;
mod middleware;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use middleware::route_gate_middleware;
pub use request::{BreakdownRequest, GateDecisionRequest};
pub use response::{ApiError, ApiErrorResponse, BreakdownResponse, HealthResponse};
pub use state::AppState;
