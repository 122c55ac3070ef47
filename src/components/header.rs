//! Top navigation bar shared by all authenticated screens.
//!
//! DESIGN
//! ======
//! One header for every role keeps navigation consistent; the start link
//! points at the signed-in role's own dashboard.

use leptos::prelude::*;

use crate::app::SessionSender;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Application header with navigation, theme toggle, identity and sign-out.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<SessionSender>>();

    let identity = move || auth.get().user.map(|u| (u.full_name, u.role.label()));
    let home_href = move || auth.get().role().map_or("/", Role::dashboard_path);

    let on_logout = move |_| {
        let sender = sender.get_untracked();
        let session = auth.get_untracked().session;
        leptos::task::spawn_local(async move {
            crate::net::session_client::sign_out(sender, session).await;
        });
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"SIGEA"</a>
            <nav class="app-header__nav">
                <a class="app-header__link" href=home_href>"Início"</a>
                <a class="app-header__link" href="/profile">"Perfil"</a>
                <a class="app-header__link" href="/sigea-assistant">"Assistente"</a>
            </nav>

            <span class="app-header__spacer"></span>

            <button
                class="btn app-header__theme-toggle"
                on:click=move |_| {
                    let next = crate::util::theme::switch_theme(ui.get().theme);
                    ui.update(|u| u.theme = next);
                }
                title="Alternar tema"
            >
                {move || ui.get().theme.toggle_glyph()}
            </button>

            <Show when=move || identity().is_some()>
                <span class="app-header__identity">
                    <span class="app-header__name">
                        {move || identity().map(|(name, _)| name).unwrap_or_default()}
                    </span>
                    <span class="app-header__role">
                        {move || identity().map(|(_, role)| role).unwrap_or_default()}
                    </span>
                </span>
            </Show>

            <button class="btn app-header__logout" on:click=on_logout title="Sair">
                "Sair"
            </button>
        </header>
    }
}
