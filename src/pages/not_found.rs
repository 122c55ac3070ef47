//! Fallback view for unknown paths.
//!
//! Installs the protected gate, so an unauthenticated visitor on a bogus
//! path still lands on `/login`; authenticated users see the not-found card.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::route_gate::{self, RouteKind};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    route_gate::install_route_gate(auth, RouteKind::Protected, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }
        >
            <main class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__text">"A página que você procura não existe."</p>
                <a class="btn btn--primary" href="/">"Voltar ao Início"</a>
            </main>
        </Show>
    }
}
