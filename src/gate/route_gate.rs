//! The route access gate.

use std::sync::Arc;

use tracing::debug;

use crate::config::GatePolicy;
use crate::error::EngineResult;
use crate::models::{RouteDecision, RouteRequest};

use super::matcher::{ExclusionMatcher, PathClass, PrefixMatcher};
use super::session::{PresenceValidator, SessionKind, SessionValidator};

/// Decides whether a request may proceed, must log in first, or should be
/// sent away from the login page.
///
/// Built once at startup from a [`GatePolicy`]; [`RouteGate::decide`] is a
/// pure function of the request after that.
///
/// # Example
///
/// ```
/// use hr_admin_engine::config::GatePolicy;
/// use hr_admin_engine::gate::RouteGate;
/// use hr_admin_engine::models::RouteDecision;
///
/// let gate = RouteGate::new(&GatePolicy::default()).unwrap();
///
/// assert_eq!(
///     gate.decide("/dashboard", None, None),
///     RouteDecision::RedirectTo("/login?redirect=%2Fdashboard".to_string())
/// );
/// assert_eq!(gate.decide("/employees/42", Some("admin-123"), None), RouteDecision::Allow);
/// ```
#[derive(Clone)]
pub struct RouteGate {
    login_path: String,
    admin_dashboard_path: String,
    employee_dashboard_path: String,
    redirect_param: String,
    prefixes: PrefixMatcher,
    exclusions: ExclusionMatcher,
    validator: Arc<dyn SessionValidator>,
}

impl std::fmt::Debug for RouteGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGate")
            .field("login_path", &self.login_path)
            .field("admin_dashboard_path", &self.admin_dashboard_path)
            .field("employee_dashboard_path", &self.employee_dashboard_path)
            .field("prefixes", &self.prefixes)
            .finish_non_exhaustive()
    }
}

impl RouteGate {
    /// Builds a gate that treats any non-empty session identifier as
    /// authenticated.
    pub fn new(policy: &GatePolicy) -> EngineResult<Self> {
        Self::with_validator(policy, Arc::new(PresenceValidator))
    }

    /// Builds a gate with a custom session validator.
    pub fn with_validator(
        policy: &GatePolicy,
        validator: Arc<dyn SessionValidator>,
    ) -> EngineResult<Self> {
        Ok(Self {
            login_path: policy.login_path.clone(),
            admin_dashboard_path: policy.admin_dashboard_path.clone(),
            employee_dashboard_path: policy.employee_dashboard_path.clone(),
            redirect_param: policy.redirect_param.clone(),
            prefixes: PrefixMatcher::new(
                policy.protected_prefixes.clone(),
                policy.public_prefixes.clone(),
            ),
            exclusions: ExclusionMatcher::new(&policy.exclusions)?,
            validator,
        })
    }

    fn authenticated(&self, kind: SessionKind, session_id: Option<&str>) -> bool {
        session_id.is_some_and(|id| self.validator.is_authenticated(kind, id))
    }

    fn login_redirect(&self, path: &str) -> String {
        format!(
            "{}?{}={}",
            self.login_path,
            self.redirect_param,
            urlencoding::encode(path)
        )
    }

    /// Decides what happens to a request for `path`.
    ///
    /// - Excluded paths are always allowed.
    /// - A protected path without an authenticated session redirects to the
    ///   login page, carrying the original path in the query string.
    /// - The login page itself, visited with a session, redirects to the
    ///   admin dashboard (admin wins) or the employee dashboard.
    /// - Everything else is allowed.
    pub fn decide(
        &self,
        path: &str,
        admin_session_id: Option<&str>,
        employee_session_id: Option<&str>,
    ) -> RouteDecision {
        if self.exclusions.is_excluded(path) {
            return RouteDecision::Allow;
        }

        let admin = self.authenticated(SessionKind::Admin, admin_session_id);
        let employee = self.authenticated(SessionKind::Employee, employee_session_id);

        if path == self.login_path && (admin || employee) {
            let target = if admin {
                &self.admin_dashboard_path
            } else {
                &self.employee_dashboard_path
            };
            debug!(path, target = %target, "Authenticated visit to login page");
            return RouteDecision::RedirectTo(target.clone());
        }

        if self.prefixes.classify(path) == PathClass::Protected && !admin && !employee {
            debug!(path, "Unauthenticated request for protected path");
            return RouteDecision::RedirectTo(self.login_redirect(path));
        }

        RouteDecision::Allow
    }

    /// [`RouteGate::decide`] over a [`RouteRequest`].
    pub fn decide_request(&self, request: &RouteRequest) -> RouteDecision {
        self.decide(
            &request.path,
            request.admin_session_id.as_deref(),
            request.employee_session_id.as_deref(),
        )
    }
}
