//! Shared scaffold for the role dashboards.
//!
//! DESIGN
//! ======
//! Every dashboard is the same screen with different words: header, a title
//! block and a grid of module tiles. The scaffold installs the protected
//! route gate, so role pages stay declarative data.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::module_card::ModuleCard;
use crate::state::auth::AuthState;
use crate::util::route_gate::{self, RouteKind};

/// One module tile of a role dashboard.
pub struct ModuleInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Route of the module's screen, once it exists.
    pub href: Option<&'static str>,
}

/// Authenticated dashboard screen: header, title and a module grid.
#[component]
pub fn DashboardScaffold(
    title: &'static str,
    subtitle: &'static str,
    modules: &'static [ModuleInfo],
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    route_gate::install_route_gate(auth, RouteKind::Protected, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }
        >
            <Header/>
            <main class="dashboard">
                <h1 class="dashboard__title">{title}</h1>
                <p class="dashboard__subtitle">{subtitle}</p>
                <div class="dashboard__grid">
                    {modules
                        .iter()
                        .map(|m| {
                            view! {
                                <ModuleCard
                                    title=m.title
                                    description=m.description
                                    icon=m.icon
                                    href=m.href
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
        </Show>
    }
}
