//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the shared state containers: `AuthState` and `UiState` live in
//! `RwSignal`s created here and handed down via context, so there is exactly
//! one instance of each per mount and no process-wide globals. The session
//! client task is spawned here too; pages and components reach it through the
//! [`SessionSender`] handle in context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastStack;
use crate::net::session_client::SessionEvent;
use crate::pages::{
    assistant::AssistantPage,
    auth::AuthPage,
    dashboards::{
        AdminDashboard, KitchenDashboard, LibraryDashboard, StudentPortal, TeacherDashboard,
    },
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Cloneable handle publishing [`SessionEvent`]s to the session client task.
///
/// Forms and effects never write `AuthState`; they publish events here and
/// the single consumer applies them in order. The default handle is detached
/// (no task behind it), which is what native test builds get and what the
/// context holds until the client spawns.
#[derive(Clone, Debug, Default)]
pub struct SessionSender {
    #[cfg(any(test, feature = "csr"))]
    tx: Option<futures::channel::mpsc::UnboundedSender<SessionEvent>>,
}

impl SessionSender {
    /// Wrap the channel returned by `spawn_session_client`.
    #[cfg(feature = "csr")]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Publish one event. Detached handles and a closed channel drop the
    /// event silently; by then there is no state left to update.
    pub fn publish(&self, event: SessionEvent) {
        #[cfg(any(test, feature = "csr"))]
        if let Some(tx) = &self.tx {
            let _ = tx.unbounded_send(event);
        }
        #[cfg(not(any(test, feature = "csr")))]
        let _ = event;
    }

    /// Close the event bus: the consumer loop ends once the queue drains and
    /// the refresh ticker stops at its next tick.
    #[cfg(feature = "csr")]
    pub fn close(&self) {
        if let Some(tx) = &self.tx {
            tx.close_channel();
        }
    }
}

/// Root application component.
///
/// Provides the shared state contexts, spawns the session client and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState {
        theme: crate::util::theme::initial_theme(),
        ..UiState::default()
    });

    let sender = RwSignal::new(SessionSender::default());
    #[cfg(feature = "csr")]
    {
        let tx = crate::net::session_client::spawn_session_client(auth, ui);
        sender.set(SessionSender::new(tx));
        on_cleanup(move || sender.get_untracked().close());
    }

    provide_context(auth);
    provide_context(ui);
    provide_context(sender);

    view! {
        <Title text="SIGEA"/>

        <ToastStack/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=AdminDashboard/>
                <Route path=StaticSegment("teacher") view=TeacherDashboard/>
                <Route path=StaticSegment("student") view=StudentPortal/>
                <Route path=StaticSegment("kitchen") view=KitchenDashboard/>
                <Route path=StaticSegment("library") view=LibraryDashboard/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("sigea-assistant") view=AssistantPage/>
            </Routes>
        </Router>
    }
}
