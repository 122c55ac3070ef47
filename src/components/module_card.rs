//! Dashboard tile for one school-management module.
//!
//! DESIGN
//! ======
//! Keeps module presentation consistent across the role dashboards. Tiles
//! without a route yet render as static previews instead of dead links.

use leptos::prelude::*;

/// A module tile shown on role dashboards.
#[component]
pub fn ModuleCard(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    #[prop(optional_no_strip)] href: Option<&'static str>,
) -> impl IntoView {
    if let Some(href) = href {
        view! {
            <a class="module-card" href=href>
                <span class="module-card__icon" aria-hidden="true">{icon}</span>
                <span class="module-card__title">{title}</span>
                <span class="module-card__description">{description}</span>
            </a>
        }
        .into_any()
    } else {
        view! {
            <div class="module-card module-card--static">
                <span class="module-card__icon" aria-hidden="true">{icon}</span>
                <span class="module-card__title">{title}</span>
                <span class="module-card__description">{description}</span>
            </div>
        }
        .into_any()
    }
}
