//! Route access decisions.
//!
//! Layouts call [`decide`] with the current [`AuthState`] and render whatever
//! it returns. Keeping the decision pure lets it be tested without a router.

use crate::auth::AuthState;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Signed-in users only (dashboard and every feature page).
    Protected,
    /// Signed-out users only (login, register).
    PublicOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still resolving; show a full-screen spinner.
    Spinner,
    Redirect(RedirectTarget),
    Render,
}

pub fn decide(auth: &AuthState, access: Access) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Spinner;
    }
    match (access, auth.is_authenticated) {
        (Access::Protected, false) => GuardDecision::Redirect(RedirectTarget::Login),
        (Access::PublicOnly, true) => GuardDecision::Redirect(RedirectTarget::Dashboard),
        _ => GuardDecision::Render,
    }
}
