//! Route authorization gate.
//!
//! The decision is a pure function of the identity and the route's allowed
//! roles; callers apply the navigation. Role mismatch is not an error, it is a
//! redirect to the caller's own landing page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use crate::identity::UserIdentity;
use crate::role::normalize;
use crate::routes::{LOGIN_ROUTE, default_route};
use crate::session::Session;

/// Outcome of evaluating a protected route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the protected view.
    Render,
    /// No identity: send the user to the sign-in page.
    RedirectToLogin,
    /// Signed in, but the role may not see this view.
    RedirectToDefaultRoute { role: String },
}

impl GuardDecision {
    /// Where to navigate, or `None` when the view should render.
    #[must_use]
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin => Some(LOGIN_ROUTE),
            Self::RedirectToDefaultRoute { role } => Some(default_route(role)),
        }
    }
}

/// Decide whether `identity` may see a route restricted to `allowed`.
pub fn decide<R: AsRef<str>>(identity: Option<&UserIdentity>, allowed: &[R]) -> GuardDecision {
    let Some(identity) = identity else {
        return GuardDecision::RedirectToLogin;
    };
    let role = identity.normalized_role();
    if allowed.iter().any(|r| normalize(r.as_ref()) == role) {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToDefaultRoute { role: identity.role.clone() }
    }
}

/// Decide against the current session; `None` while the identity check is pending.
pub fn evaluate<R: AsRef<str>>(session: &Session, allowed: &[R]) -> Option<GuardDecision> {
    if session.is_pending() {
        return None;
    }
    Some(decide(session.identity.as_ref(), allowed))
}
