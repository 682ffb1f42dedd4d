//! Session validation seam.
//!
//! The gate never checks signatures or expiry; that belongs to the service
//! that issues sessions. It asks a [`SessionValidator`] whether a cookie
//! value counts as authenticated.

/// Which kind of session a cookie value claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// An HR administrator.
    Admin,
    /// An employee using the self-service pages.
    Employee,
}

/// Decides whether a session identifier counts as authenticated.
pub trait SessionValidator: Send + Sync {
    /// Returns true when `session_id` is an authenticated session of `kind`.
    fn is_authenticated(&self, kind: SessionKind, session_id: &str) -> bool;
}

/// Treats any non-empty identifier as authenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceValidator;

impl SessionValidator for PresenceValidator {
    fn is_authenticated(&self, _kind: SessionKind, session_id: &str) -> bool {
        !session_id.trim().is_empty()
    }
}
