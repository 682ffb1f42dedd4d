//! Route access gate.
//!
//! Runs once per inbound request ahead of any page rendering and decides
//! between letting the request through, sending it to the login page, or
//! sending an already authenticated user away from the login page.
//!
//! The gate only looks at whether session cookies are present and accepted
//! by a [`SessionValidator`]; verifying the sessions themselves is the
//! identity provider's job.

mod cookies;
mod matcher;
mod route_gate;
mod session;

pub use cookies::find_cookie;
pub use matcher::{ExclusionMatcher, PathClass, PrefixMatcher};
pub use route_gate::RouteGate;
pub use session::{PresenceValidator, SessionKind, SessionValidator};
