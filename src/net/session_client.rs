//! Session client: the single writer of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms and effects never mutate `AuthState` directly. They publish
//! [`SessionEvent`]s on a channel; one spawned task consumes the channel
//! sequentially, resolves each session against the `profiles` table and
//! applies the outcome. Sequential consumption, plus the resolve epoch kept
//! in `AuthState`, means a slow profile response can never clobber the
//! outcome of a newer session change.
//!
//! All browser I/O is gated behind `#[cfg(feature = "csr")]`; the event
//! vocabulary, the operations and the redirect parsing compile natively so
//! they stay testable.
//!
//! ERROR HANDLING
//! ==============
//! A failed profile lookup resolves to the signed-out view instead of
//! wedging the loading screen. Refresh failures distinguish transport
//! trouble (retry later, keep the session) from platform rejection (the
//! token is gone, sign out).

#[path = "session_client_parse.rs"]
mod session_client_parse;

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

pub use self::session_client_parse::{LinkKind, RedirectTokens, parse_redirect_fragment};

use crate::app::SessionSender;
use crate::net::api::{self, SignUpOutcome};
use crate::net::types::{ApiError, Role, Session};
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::ui::{ToastKind, UiState};
#[cfg(feature = "csr")]
use crate::util::session_store;
#[cfg(feature = "csr")]
use leptos::prelude::{GetUntracked, RwSignal, Update};

/// Everything that can change the session funnels through this vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session became available: password grant, confirmed sign-up, or
    /// startup restore from localStorage.
    SignedIn(Session),
    /// The user signed out or the session became unusable.
    SignedOut,
    /// The refresh loop obtained a replacement session.
    TokenRefreshed(Session),
    /// A recovery link landed: the session is live but the user must set a
    /// new password before leaving the auth screen.
    PasswordRecovery(Session),
    /// The recovery form saved a new password under `session`.
    PasswordUpdated(Session),
}

/// What an event does to the password-recovery signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoverySignal {
    /// Raise it: the user must set a new password before leaving `/auth`.
    Raise,
    /// Lower it: the flow finished or was abandoned.
    Lower,
    /// Leave it alone: a refresh mid-recovery must not release the user
    /// from the new-password form.
    Keep,
}

/// The non-resolution consequences of one event, decided before any I/O.
///
/// `session` doubles as the persistence instruction: a present session is
/// saved to localStorage and resolved, an absent one clears the stored
/// session and resolves to the signed-out view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventOutcome {
    pub recovery: RecoverySignal,
    pub session: Option<Session>,
}

/// Map an event to its outcome. Pure, so the per-event decisions stay
/// testable off the browser; `apply_event` only executes what this returns.
pub fn event_outcome(event: SessionEvent) -> EventOutcome {
    match event {
        SessionEvent::SignedIn(session) => EventOutcome {
            recovery: RecoverySignal::Lower,
            session: Some(session),
        },
        SessionEvent::SignedOut => EventOutcome {
            recovery: RecoverySignal::Lower,
            session: None,
        },
        SessionEvent::TokenRefreshed(session) => EventOutcome {
            recovery: RecoverySignal::Keep,
            session: Some(session),
        },
        SessionEvent::PasswordRecovery(session) => EventOutcome {
            recovery: RecoverySignal::Raise,
            session: Some(session),
        },
        SessionEvent::PasswordUpdated(session) => EventOutcome {
            recovery: RecoverySignal::Lower,
            session: Some(session),
        },
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Run the password grant and hand the resulting session to the client.
///
/// # Errors
///
/// Propagates the grant failure; nothing is published in that case.
pub async fn sign_in(sender: SessionSender, email: &str, password: &str) -> Result<(), ApiError> {
    let session = api::sign_in(email, password).await?;
    sender.publish(SessionEvent::SignedIn(session));
    Ok(())
}

/// Whether a successful registration still needs email confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpCompletion {
    SignedIn,
    ConfirmationRequired,
}

/// Register an account. When the platform signs the account in directly the
/// session is handed to the client; otherwise the caller should tell the
/// user to check their inbox.
///
/// # Errors
///
/// Propagates the registration failure; nothing is published in that case.
pub async fn sign_up(
    sender: SessionSender,
    email: &str,
    password: &str,
    full_name: &str,
    role: Role,
) -> Result<SignUpCompletion, ApiError> {
    match api::sign_up(email, password, full_name, role).await? {
        SignUpOutcome::SignedIn(session) => {
            sender.publish(SessionEvent::SignedIn(session));
            Ok(SignUpCompletion::SignedIn)
        }
        SignUpOutcome::ConfirmationRequired => Ok(SignUpCompletion::ConfirmationRequired),
    }
}

/// Sign out: revoke the session server-side (best effort), then clear local
/// state. Local sign-out happens even when revocation fails, so the UI never
/// sticks to a dead session.
pub async fn sign_out(sender: SessionSender, session: Option<Session>) {
    if let Some(session) = session {
        if let Err(err) = api::sign_out(&session.access_token).await {
            leptos::logging::warn!("sign-out revocation failed: {err}");
        }
    }
    sender.publish(SessionEvent::SignedOut);
}

/// Save the new password chosen on the recovery form.
///
/// # Errors
///
/// Propagates the update failure; the recovery flow stays active so the
/// user can retry.
pub async fn complete_password_reset(
    sender: SessionSender,
    session: Session,
    new_password: &str,
) -> Result<(), ApiError> {
    api::update_password(&session.access_token, new_password).await?;
    sender.publish(SessionEvent::PasswordUpdated(session));
    Ok(())
}

// ============================================================================
// Client task
// ============================================================================

/// How often the refresh loop re-checks the session's deadline.
#[cfg(feature = "csr")]
const REFRESH_POLL_SECS: u64 = 30;

/// Refresh this many seconds before expiry so in-flight calls never race
/// the deadline.
#[cfg(feature = "csr")]
const REFRESH_LEEWAY_SECS: i64 = 60;

/// Spawn the session client and its refresh loop as local async tasks.
///
/// Returns the channel on which [`SessionEvent`]s are published.
#[cfg(feature = "csr")]
pub fn spawn_session_client(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
) -> futures::channel::mpsc::UnboundedSender<SessionEvent> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<SessionEvent>();
    leptos::task::spawn_local(session_client_loop(auth, ui, tx.clone(), rx));
    leptos::task::spawn_local(refresh_loop(auth, tx.clone()));
    tx
}

#[cfg(feature = "csr")]
async fn session_client_loop(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    tx: futures::channel::mpsc::UnboundedSender<SessionEvent>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<SessionEvent>,
) {
    use futures::StreamExt;

    startup(&tx).await;

    while let Some(event) = rx.next().await {
        apply_event(auth, ui, event).await;
    }
}

/// Seed the first event: a redirect fragment if the page was opened from an
/// email link, otherwise whatever localStorage still holds.
#[cfg(feature = "csr")]
async fn startup(tx: &futures::channel::mpsc::UnboundedSender<SessionEvent>) {
    if let Some(tokens) = parse_redirect_fragment(&current_hash()) {
        scrub_redirect_hash();
        let kind = tokens.link_kind;
        match redeem_redirect(tokens).await {
            Ok(session) => {
                let event = if kind == LinkKind::Recovery {
                    SessionEvent::PasswordRecovery(session)
                } else {
                    SessionEvent::SignedIn(session)
                };
                let _ = tx.unbounded_send(event);
                return;
            }
            Err(err) => {
                // Fall through to the stored session.
                leptos::logging::warn!("redirect token redemption failed: {err}");
            }
        }
    }

    match session_store::load_session() {
        None => {
            let _ = tx.unbounded_send(SessionEvent::SignedOut);
        }
        Some(stored) if stored.is_expired(js_sys::Date::now()) => {
            match api::refresh_session(&stored.refresh_token).await {
                Ok(next) => {
                    let _ = tx.unbounded_send(SessionEvent::TokenRefreshed(next));
                }
                Err(err) => {
                    leptos::logging::warn!("stored session refresh failed: {err}");
                    let _ = tx.unbounded_send(SessionEvent::SignedOut);
                }
            }
        }
        Some(stored) => {
            let _ = tx.unbounded_send(SessionEvent::SignedIn(stored));
        }
    }
}

/// Build a full session from redirect tokens. The fragment carries no user
/// object, so the principal is fetched with the new access token.
#[cfg(feature = "csr")]
async fn redeem_redirect(tokens: RedirectTokens) -> Result<Session, ApiError> {
    let user = api::fetch_user(&tokens.access_token).await?;
    let now_secs = (js_sys::Date::now() / 1000.0) as i64;
    Ok(Session {
        expires_at: tokens.absolute_expiry(now_secs),
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        user,
    })
}

/// Apply one event: execute its [`EventOutcome`], then resolve the session
/// into a user. Awaited to completion before the next event is taken off
/// the channel.
#[cfg(feature = "csr")]
async fn apply_event(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, event: SessionEvent) {
    let outcome = event_outcome(event);

    match outcome.recovery {
        RecoverySignal::Raise => {
            auth.update(|a| a.note_recovery());
            crate::components::toast::show_toast(
                ui,
                ToastKind::Info,
                "Redefina sua senha",
                "Você agora pode definir uma nova senha para sua conta.",
            );
        }
        RecoverySignal::Lower => auth.update(|a| a.clear_recovery()),
        RecoverySignal::Keep => {}
    }

    match &outcome.session {
        Some(session) => session_store::save_session(session),
        None => session_store::clear_session(),
    }

    resolve_session(auth, outcome.session).await;
}

/// Run one resolution: record the session, fetch the owning profile, apply
/// the outcome under the epoch issued at the start.
#[cfg(feature = "csr")]
async fn resolve_session(auth: RwSignal<AuthState>, session: Option<Session>) {
    let Some(epoch) = auth.try_update(|a| a.begin_resolve(session.clone())) else {
        return;
    };
    let Some(session) = session else {
        return;
    };

    let lookup = api::fetch_profile(&session).await;
    if let Err(err) = &lookup {
        leptos::logging::warn!("profile lookup failed: {err}");
    }
    let _ = auth.try_update(|a| a.finish_resolve(epoch, lookup));
}

/// Poll the session's deadline and trade the refresh token for a new
/// session shortly before expiry.
#[cfg(feature = "csr")]
async fn refresh_loop(
    auth: RwSignal<AuthState>,
    tx: futures::channel::mpsc::UnboundedSender<SessionEvent>,
) {
    let mut spent_refresh_token: Option<String> = None;

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_POLL_SECS)).await;
        if tx.is_closed() {
            break;
        }

        let Some(session) = auth.get_untracked().session else {
            continue;
        };
        if !session.expires_within(REFRESH_LEEWAY_SECS, js_sys::Date::now()) {
            continue;
        }
        // A refresh token is single use; never send one twice while its
        // replacement is still working through the channel.
        if spent_refresh_token.as_deref() == Some(session.refresh_token.as_str()) {
            continue;
        }

        match api::refresh_session(&session.refresh_token).await {
            Ok(next) => {
                spent_refresh_token = Some(session.refresh_token.clone());
                let _ = tx.unbounded_send(SessionEvent::TokenRefreshed(next));
            }
            Err(ApiError::NetworkOrService(err)) => {
                // Transport trouble: keep the session, retry next tick.
                leptos::logging::warn!("session refresh failed: {err}");
            }
            Err(err) => {
                leptos::logging::warn!("session refresh rejected: {err}");
                spent_refresh_token = Some(session.refresh_token.clone());
                let _ = tx.unbounded_send(SessionEvent::SignedOut);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Drop the token fragment from the address bar so tokens never linger in
/// the URL history.
#[cfg(feature = "csr")]
fn scrub_redirect_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_owned());
    let search = location.search().unwrap_or_default();
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{path}{search}")),
        );
    }
}
