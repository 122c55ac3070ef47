//! Authenticated landing route: forwards to the signed-in role's dashboard.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::route_gate::{self, RouteKind};

/// Where `/` should forward for `state`, once resolution has settled.
fn forward_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    state.role().map(Role::dashboard_path)
}

/// `/` never renders content of its own: the gate sends visitors to
/// `/login`, signed-in users continue to their role's dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    route_gate::install_route_gate(auth, RouteKind::Protected, navigate.clone());

    Effect::new(move || {
        if let Some(path) = forward_target(&auth.get()) {
            navigate(path, NavigateOptions::default());
        }
    });

    view! { <div class="page-loading" aria-busy="true"></div> }
}
