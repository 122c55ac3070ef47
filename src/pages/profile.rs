//! Account screen for the signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSender;
use crate::components::header::Header;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::route_gate::{self, RouteKind};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sender = expect_context::<RwSignal<SessionSender>>();
    route_gate::install_route_gate(auth, RouteKind::Protected, use_navigate());

    let user = move || auth.get().user;

    let on_logout = move |_| {
        let sender = sender.get_untracked();
        let session = auth.get_untracked().session;
        leptos::task::spawn_local(async move {
            crate::net::session_client::sign_out(sender, session).await;
        });
    };

    view! {
        <Show
            when=move || user().is_some()
            fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }
        >
            <Header/>
            <main class="profile-page">
                <div class="profile-card">
                    {move || {
                        user()
                            .map(|u| {
                                let initial = u
                                    .full_name
                                    .chars()
                                    .next()
                                    .map(|c| c.to_uppercase().to_string())
                                    .unwrap_or_default();
                                view! {
                                    {match u.avatar_url.clone() {
                                        Some(url) => {
                                            view! {
                                                <img
                                                    class="profile-card__avatar"
                                                    src=url
                                                    alt="Avatar"
                                                />
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <span class="profile-card__avatar profile-card__avatar--initial">
                                                    {initial}
                                                </span>
                                            }
                                                .into_any()
                                        }
                                    }}
                                    <h1 class="profile-card__name">{u.full_name.clone()}</h1>
                                    <p class="profile-card__email">{u.email.clone()}</p>
                                    <span class="profile-card__role">{u.role.label()}</span>

                                    <dl class="profile-card__details">
                                        {(u.role == Role::Student && u.class_name.is_some())
                                            .then(|| {
                                                view! {
                                                    <dt>"Turma"</dt>
                                                    <dd>{u.class_name.clone().unwrap_or_default()}</dd>
                                                }
                                            })}
                                        {(u.role == Role::Teacher && u.subject.is_some())
                                            .then(|| {
                                                view! {
                                                    <dt>"Disciplina"</dt>
                                                    <dd>{u.subject.clone().unwrap_or_default()}</dd>
                                                }
                                            })}
                                    </dl>
                                }
                            })
                    }}
                    <button class="btn btn--danger profile-card__logout" on:click=on_logout>
                        "Sair da Conta"
                    </button>
                </div>
            </main>
        </Show>
    }
}
