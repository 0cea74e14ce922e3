//! Route guard decisions for protected and guest-only regions.
//!
//! # Responsibility
//! - Decide, synchronously and without side effects, whether a navigation
//!   attempt may proceed or where it must redirect.
//!
//! # Invariants
//! - Guards are pure readers of session state; they never mutate it.
//! - Guards assume the session store has been rehydrated.

use crate::repo::session_repo::SessionRepository;
use crate::store::session::SessionStore;

/// Login entry point for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";
/// Default entry point for authenticated users.
pub const HOME_PATH: &str = "/";

/// Outcome of a guard evaluation, consumed by the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation may proceed into the requested region.
    Allow,
    /// Navigation must abort and go to `to` instead. `return_to` carries
    /// the originally requested path when the redirect should bounce back
    /// after login.
    Redirect {
        to: String,
        return_to: Option<String>,
    },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Guards a protected region: unauthenticated visitors are sent to the
/// login page carrying the requested path as a return target.
pub fn evaluate_protected<R: SessionRepository>(
    session: &SessionStore<R>,
    requested_path: &str,
) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            return_to: Some(requested_path.to_string()),
        }
    }
}

/// Guards a guest-only region: authenticated users are sent to the
/// default authenticated entry point.
pub fn evaluate_guest<R: SessionRepository>(session: &SessionStore<R>) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Redirect {
            to: HOME_PATH.to_string(),
            return_to: None,
        }
    } else {
        GuardDecision::Allow
    }
}
