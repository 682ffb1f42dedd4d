//! Core data models for the HR admin engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod route;
mod salary;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use route::{RouteDecision, RouteRequest};
pub use salary::{AnnualComponents, SalaryBreakdown, SalaryInput};
