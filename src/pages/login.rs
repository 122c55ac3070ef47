//! Public landing page with the SIGEA branding and role entry points.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::SIGN_UP_ROLES;
use crate::state::auth::AuthState;
use crate::util::route_gate::{self, RouteKind};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    route_gate::install_route_gate(auth, RouteKind::Login, use_navigate());

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }
        >
            <div class="login-page">
                <div class="login-card">
                    <h1 class="login-card__brand">"SIGEA"</h1>
                    <p class="login-card__subtitle">"Sistema Integrado de Gestão Educacional"</p>

                    <a class="btn btn--primary login-card__enter" href="/auth">
                        "Acessar Conta"
                    </a>

                    <div class="login-card__divider" aria-hidden="true"></div>

                    <p class="login-card__hint">"Primeiro acesso? Crie sua conta como:"</p>
                    <div class="login-card__roles">
                        {SIGN_UP_ROLES
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <a
                                        class="role-card"
                                        href=format!("/auth?role={}", role.as_str())
                                    >
                                        <span class="role-card__label">{role.label()}</span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
