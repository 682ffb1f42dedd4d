//! Route gate request and decision models.

use serde::{Deserialize, Serialize};

/// The parts of an inbound request the route gate looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// The requested URL path, without query string.
    pub path: String,
    /// Admin session identifier from the cookie jar, if any.
    #[serde(default)]
    pub admin_session_id: Option<String>,
    /// Employee session identifier from the cookie jar, if any.
    #[serde(default)]
    pub employee_session_id: Option<String>,
}

impl RouteRequest {
    /// Creates a request descriptor with no sessions attached.
    pub fn anonymous(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            admin_session_id: None,
            employee_session_id: None,
        }
    }
}

/// What the gate decided for a request.
///
/// # Example
///
/// ```
/// use hr_admin_engine::models::RouteDecision;
///
/// let decision = RouteDecision::RedirectTo("/login?redirect=%2Fdashboard".to_string());
/// assert_eq!(decision.location(), Some("/login?redirect=%2Fdashboard"));
/// assert!(RouteDecision::Allow.is_allow());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "location", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Let the request through unmodified.
    Allow,
    /// Answer with a redirect to the given location.
    #[serde(rename = "redirect")]
    RedirectTo(String),
}

impl RouteDecision {
    /// Returns true for [`RouteDecision::Allow`].
    pub fn is_allow(&self) -> bool {
        matches!(self, RouteDecision::Allow)
    }

    /// Returns the redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            RouteDecision::Allow => None,
            RouteDecision::RedirectTo(location) => Some(location),
        }
    }
}
