//! SIGEA assistant screen (placeholder until the assistant service lands).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::auth::AuthState;
use crate::util::route_gate::{self, RouteKind};

#[component]
pub fn AssistantPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    route_gate::install_route_gate(auth, RouteKind::Protected, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }
        >
            <Header/>
            <main class="assistant-page">
                <div class="assistant-panel">
                    <span class="assistant-panel__icon" aria-hidden="true">"✨"</span>
                    <h1 class="assistant-panel__title">"Assistente SIGEA"</h1>
                    <p class="assistant-panel__text">
                        "O assistente inteligente da escola está em preparação. "
                        "Em breve você poderá tirar dúvidas sobre notas, turmas e rotinas por aqui."
                    </p>
                </div>
            </main>
        </Show>
    }
}
