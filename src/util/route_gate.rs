//! Shared route gating for authenticated and unauthenticated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page applies the same decision table against `AuthState`, so login
//! redirects behave identically on each route. The table is a pure function;
//! pages install it as an effect via [`install_route_gate`].
//!
//! While a resolution is in flight nothing redirects — pages render their
//! neutral placeholder and wait. A user in the password-recovery flow is
//! authenticated by the recovery link but must stay on `/auth` to set the
//! new password, so that one case renders instead of bouncing home.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// What kind of screen the gate is protecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// `/login` — public landing screen.
    Login,
    /// `/auth` — public sign-in/sign-up card, which also hosts the
    /// set-new-password form during recovery.
    AuthCard,
    /// Any screen that requires a resolved user.
    Protected,
}

/// Outcome of the gate for one state/route pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Resolution in flight: render the placeholder, do not redirect.
    Wait,
    /// The requested screen may render.
    Render,
    /// Send the visitor to `/login`.
    RedirectLogin,
    /// Send the signed-in user back to `/`.
    RedirectHome,
}

/// The routing decision table.
pub fn decide(state: &AuthState, kind: RouteKind) -> GateDecision {
    if state.loading {
        return GateDecision::Wait;
    }
    match (state.is_authenticated(), kind) {
        (false, RouteKind::Login | RouteKind::AuthCard) => GateDecision::Render,
        (false, RouteKind::Protected) => GateDecision::RedirectLogin,
        (true, RouteKind::AuthCard) if state.password_recovery => GateDecision::Render,
        (true, RouteKind::Login | RouteKind::AuthCard) => GateDecision::RedirectHome,
        (true, RouteKind::Protected) => GateDecision::Render,
    }
}

/// Install the gate for a page of `kind`: re-evaluates whenever auth state
/// changes and performs the redirects the table calls for.
pub fn install_route_gate<F>(auth: RwSignal<AuthState>, kind: RouteKind, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || match decide(&auth.get(), kind) {
        GateDecision::RedirectLogin => navigate("/login", NavigateOptions::default()),
        GateDecision::RedirectHome => navigate("/", NavigateOptions::default()),
        GateDecision::Wait | GateDecision::Render => {}
    });
}
