//! Request types for the HR admin engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{RouteRequest, SalaryInput};

/// Request body for `POST /api/payroll/breakdown`.
///
/// `annual_salary` may be missing or `null` while the user has not typed
/// anything yet; `include_provident_fund` is always required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The annual salary entered on the form.
    pub annual_salary: Option<Decimal>,
    /// Whether provident fund is part of the package.
    pub include_provident_fund: bool,
}

impl From<BreakdownRequest> for SalaryInput {
    fn from(req: BreakdownRequest) -> Self {
        SalaryInput {
            annual_salary: req.annual_salary,
            include_provident_fund: req.include_provident_fund,
        }
    }
}

/// Request body for `POST /api/gate/decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateDecisionRequest {
    /// The path to evaluate.
    pub path: String,
    /// Admin session identifier, if any.
    #[serde(default)]
    pub admin_session_id: Option<String>,
    /// Employee session identifier, if any.
    #[serde(default)]
    pub employee_session_id: Option<String>,
}

impl TryFrom<GateDecisionRequest> for RouteRequest {
    type Error = EngineError;

    fn try_from(req: GateDecisionRequest) -> EngineResult<Self> {
        if !req.path.starts_with('/') {
            return Err(EngineError::InvalidRequest {
                field: "path".to_string(),
                message: format!("'{}' must start with '/'", req.path),
            });
        }

        Ok(RouteRequest {
            path: req.path,
            admin_session_id: req.admin_session_id,
            employee_session_id: req.employee_session_id,
        })
    }
}
