//! Toast notifications: rendering and lifetime scheduling.
//!
//! DESIGN
//! ======
//! `UiState` owns the toast list; this module renders it and schedules
//! automatic dismissal. [`show_toast`] is the single entry point so every
//! toast gets the same lifetime, wherever it is raised from.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// How long a toast stays on screen.
#[cfg(feature = "csr")]
const TOAST_DISMISS_SECS: u64 = 6;

/// Show a toast and schedule its automatic dismissal.
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, title: &str, message: &str) {
    let id = ui.try_update(|u| u.push_toast(kind, title, message));
    #[cfg(feature = "csr")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_DISMISS_SECS)).await;
            ui.update(|u| u.dismiss_toast(&id));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Fixed-position stack rendering the visible toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let dismiss_id = toast.id.clone();
                        view! {
                            <div class=format!("toast {}", toast.kind.css_class())>
                                <div class="toast__body">
                                    <span class="toast__title">{toast.title}</span>
                                    <span class="toast__message">{toast.message}</span>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| ui.update(|u| u.dismiss_toast(&dismiss_id))
                                    aria-label="Fechar"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
