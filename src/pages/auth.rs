//! Sign-in / sign-up card, plus the forgot-password and set-new-password
//! views.
//!
//! SYSTEM CONTEXT
//! ==============
//! All four handlers validate first (where applicable), call the session
//! operations and surface failures as toasts. The set-new-password view is
//! driven by the global recovery flag, which the session client raises when
//! a recovery link lands; the route gate keeps this page visible for that
//! one authenticated case.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::SessionSender;
use crate::components::toast::show_toast;
use crate::net::api;
use crate::net::session_client;
use crate::net::types::{ApiError, Role, SIGN_UP_ROLES};
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::route_gate::{self, RouteKind};
use crate::util::validation::{ValidationError, validate_new_password, validate_sign_up};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    SignIn,
    SignUp,
}

/// Friendly message for a failed password grant. The platform's own wording
/// is shown for anything that is not a credentials problem.
fn sign_in_error_message(err: &ApiError) -> String {
    match err {
        ApiError::InvalidCredentials(_) => {
            "Email ou senha inválidos. Por favor, verifique e tente novamente.".to_owned()
        }
        other => platform_message(other),
    }
}

/// The platform's own message, without the error-kind prefix.
fn platform_message(err: &ApiError) -> String {
    match err {
        ApiError::InvalidCredentials(msg)
        | ApiError::Validation(msg)
        | ApiError::NetworkOrService(msg)
        | ApiError::NotFound(msg) => msg.clone(),
    }
}

/// Toast title for each client-side sign-up failure.
fn sign_up_error_title(problem: ValidationError) -> &'static str {
    match problem {
        ValidationError::PasswordMismatch => "Erro no cadastro",
        ValidationError::EmailInvalid => "Email inválido",
        ValidationError::PasswordTooShort => "Senha muito curta",
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<SessionSender>>();
    route_gate::install_route_gate(auth, RouteKind::AuthCard, use_navigate());

    // `?role=...` preseeds and locks the sign-up role selector. Only roles
    // the public form offers are honored.
    let preset_role = use_query_map().with_untracked(|q| {
        q.get("role")
            .and_then(|raw| Role::parse(&raw))
            .filter(|role| SIGN_UP_ROLES.contains(role))
    });
    let role_locked = preset_role.is_some();

    let active_tab = RwSignal::new(if preset_role.is_some() { Tab::SignUp } else { Tab::SignIn });
    let show_forgot = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let sign_in_email = RwSignal::new(String::new());
    let sign_in_password = RwSignal::new(String::new());

    let sign_up_name = RwSignal::new(String::new());
    let sign_up_email = RwSignal::new(String::new());
    let sign_up_password = RwSignal::new(String::new());
    let sign_up_confirm = RwSignal::new(String::new());
    let sign_up_role = RwSignal::new(preset_role.unwrap_or_default());

    let forgot_email = RwSignal::new(String::new());

    let new_password = RwSignal::new(String::new());
    let confirm_new_password = RwSignal::new(String::new());

    let recovery_active = move || auth.get().password_recovery;

    let title = move || {
        if recovery_active() {
            "Crie uma Nova Senha"
        } else if show_forgot.get() {
            "Recuperar Senha"
        } else {
            "Acessar Conta"
        }
    };
    let description = move || {
        if recovery_active() {
            "Digite sua nova senha abaixo."
        } else if show_forgot.get() {
            "Insira seu e-mail para receber o link de recuperação."
        } else {
            "Entre ou crie uma nova conta para acessar o SIGEA."
        }
    };

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email = sign_in_email.get().trim().to_owned();
        let password = sign_in_password.get();
        busy.set(true);

        let sender = sender.get_untracked();
        leptos::task::spawn_local(async move {
            if let Err(err) = session_client::sign_in(sender, &email, &password).await {
                show_toast(ui, ToastKind::Error, "Erro ao entrar", &sign_in_error_message(&err));
            }
            busy.set(false);
        });
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let full_name = sign_up_name.get().trim().to_owned();
        let email = sign_up_email.get().trim().to_owned();
        let password = sign_up_password.get();
        let confirm = sign_up_confirm.get();

        // Client-side checks run before anything reaches the platform.
        if let Err(problem) = validate_sign_up(&email, &password, &confirm) {
            show_toast(ui, ToastKind::Error, sign_up_error_title(problem), problem.user_message());
            return;
        }
        busy.set(true);

        let role = sign_up_role.get();
        let sender = sender.get_untracked();
        leptos::task::spawn_local(async move {
            match session_client::sign_up(sender, &email, &password, &full_name, role).await {
                Ok(_) => {
                    show_toast(
                        ui,
                        ToastKind::Success,
                        "Cadastro realizado!",
                        "Sua conta foi criada com sucesso. Agora você já pode fazer o login.",
                    );
                    active_tab.set(Tab::SignIn);
                }
                Err(err) => {
                    show_toast(ui, ToastKind::Error, "Erro ao cadastrar", &platform_message(&err));
                }
            }
            busy.set(false);
        });
    };

    let on_forgot = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email = forgot_email.get().trim().to_owned();
        busy.set(true);

        leptos::task::spawn_local(async move {
            match api::request_password_reset(&email).await {
                Ok(()) => {
                    show_toast(
                        ui,
                        ToastKind::Success,
                        "Verifique seu e-mail",
                        "Um link para redefinir sua senha foi enviado.",
                    );
                    show_forgot.set(false);
                }
                Err(err) => show_toast(ui, ToastKind::Error, "Erro", &platform_message(&err)),
            }
            busy.set(false);
        });
    };

    let on_update_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password = new_password.get();
        let confirm = confirm_new_password.get();

        if let Err(problem) = validate_new_password(&password, &confirm) {
            let message = match problem {
                ValidationError::PasswordTooShort => "A nova senha deve ter no mínimo 6 caracteres.",
                other => other.user_message(),
            };
            show_toast(ui, ToastKind::Error, "Erro", message);
            return;
        }
        let Some(session) = auth.get_untracked().session else {
            show_toast(
                ui,
                ToastKind::Error,
                "Erro ao redefinir senha",
                "Sessão de recuperação expirada. Solicite um novo link.",
            );
            return;
        };
        busy.set(true);

        let sender = sender.get_untracked();
        leptos::task::spawn_local(async move {
            match session_client::complete_password_reset(sender, session, &password).await {
                Ok(()) => {
                    show_toast(
                        ui,
                        ToastKind::Success,
                        "Senha redefinida!",
                        "Sua senha foi alterada com sucesso. Você já pode fazer login.",
                    );
                    new_password.set(String::new());
                    confirm_new_password.set(String::new());
                }
                Err(err) => {
                    show_toast(ui, ToastKind::Error, "Erro ao redefinir senha", &platform_message(&err));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }
        >
            <div class="auth-page">
                <div class="auth-card">
                    <a class="auth-card__back" href="/login">"Voltar"</a>
                    <div class="auth-card__logo" aria-hidden="true">"SIGEA"</div>
                    <h2 class="auth-card__title">{title}</h2>
                    <p class="auth-card__description">{description}</p>

                    <Show when=recovery_active>
                        <form class="auth-form" on:submit=on_update_password>
                            <div class="field">
                                <label class="field__label" for="new-password">"Nova Senha"</label>
                                <input
                                    class="field__input"
                                    id="new-password"
                                    type="password"
                                    placeholder="Mínimo 6 caracteres"
                                    prop:value=move || new_password.get()
                                    on:input=move |ev| new_password.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="field">
                                <label class="field__label" for="confirm-new-password">
                                    "Confirmar Nova Senha"
                                </label>
                                <input
                                    class="field__input"
                                    id="confirm-new-password"
                                    type="password"
                                    placeholder="Repita a nova senha"
                                    prop:value=move || confirm_new_password.get()
                                    on:input=move |ev| confirm_new_password.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                                "Salvar Nova Senha"
                            </button>
                        </form>
                    </Show>

                    <Show when=move || !recovery_active() && show_forgot.get()>
                        <form class="auth-form" on:submit=on_forgot>
                            <div class="field">
                                <label class="field__label" for="forgot-email">"Email"</label>
                                <input
                                    class="field__input"
                                    id="forgot-email"
                                    type="email"
                                    placeholder="seu@email.com"
                                    prop:value=move || forgot_email.get()
                                    on:input=move |ev| forgot_email.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                                "Enviar Link"
                            </button>
                            <button
                                class="btn btn--link auth-form__alt"
                                type="button"
                                on:click=move |_| show_forgot.set(false)
                            >
                                "Voltar para o login"
                            </button>
                        </form>
                    </Show>

                    <Show when=move || !recovery_active() && !show_forgot.get()>
                        <div class="auth-tabs" role="tablist">
                            <button
                                class="auth-tabs__tab"
                                class:auth-tabs__tab--active=move || active_tab.get() == Tab::SignIn
                                on:click=move |_| active_tab.set(Tab::SignIn)
                            >
                                "Entrar"
                            </button>
                            <button
                                class="auth-tabs__tab"
                                class:auth-tabs__tab--active=move || active_tab.get() == Tab::SignUp
                                on:click=move |_| active_tab.set(Tab::SignUp)
                            >
                                "Cadastrar"
                            </button>
                        </div>

                        <Show when=move || active_tab.get() == Tab::SignIn>
                            <form class="auth-form" on:submit=on_sign_in>
                                <div class="field">
                                    <label class="field__label" for="email">"Email"</label>
                                    <input
                                        class="field__input"
                                        id="email"
                                        type="email"
                                        placeholder="seu@email.com"
                                        prop:value=move || sign_in_email.get()
                                        on:input=move |ev| sign_in_email.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="field">
                                    <label class="field__label" for="password">"Senha"</label>
                                    <input
                                        class="field__input"
                                        id="password"
                                        type="password"
                                        placeholder="********"
                                        prop:value=move || sign_in_password.get()
                                        on:input=move |ev| sign_in_password.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                                    "Entrar"
                                </button>
                                <button
                                    class="btn btn--link auth-form__alt"
                                    type="button"
                                    on:click=move |_| show_forgot.set(true)
                                >
                                    "Esqueceu sua senha?"
                                </button>
                            </form>
                        </Show>

                        <Show when=move || active_tab.get() == Tab::SignUp>
                            <form class="auth-form" on:submit=on_sign_up>
                                <div class="field">
                                    <label class="field__label" for="signup-name">"Nome Completo"</label>
                                    <input
                                        class="field__input"
                                        id="signup-name"
                                        type="text"
                                        placeholder="Seu Nome Completo"
                                        prop:value=move || sign_up_name.get()
                                        on:input=move |ev| sign_up_name.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="field">
                                    <label class="field__label" for="signup-email">"Email"</label>
                                    <input
                                        class="field__input"
                                        id="signup-email"
                                        type="email"
                                        placeholder="seu@email.com"
                                        prop:value=move || sign_up_email.get()
                                        on:input=move |ev| sign_up_email.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="field">
                                    <label class="field__label" for="signup-password">"Senha"</label>
                                    <input
                                        class="field__input"
                                        id="signup-password"
                                        type="password"
                                        placeholder="Mínimo 6 caracteres"
                                        prop:value=move || sign_up_password.get()
                                        on:input=move |ev| sign_up_password.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="field">
                                    <label class="field__label" for="signup-confirm-password">
                                        "Confirmar Senha"
                                    </label>
                                    <input
                                        class="field__input"
                                        id="signup-confirm-password"
                                        type="password"
                                        placeholder="Repita a senha"
                                        prop:value=move || sign_up_confirm.get()
                                        on:input=move |ev| sign_up_confirm.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="field">
                                    <label class="field__label" for="signup-role">"Tipo de Conta"</label>
                                    <select
                                        class="field__input"
                                        id="signup-role"
                                        prop:value=move || sign_up_role.get().as_str()
                                        on:change=move |ev| {
                                            if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                                sign_up_role.set(role);
                                            }
                                        }
                                        disabled=role_locked
                                    >
                                        {SIGN_UP_ROLES
                                            .into_iter()
                                            .map(|role| {
                                                view! {
                                                    <option value=role.as_str()>{role.label()}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </div>
                                <button class="btn btn--accent auth-form__submit" type="submit" disabled=move || busy.get()>
                                    "Criar Conta"
                                </button>
                            </form>
                        </Show>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
