//! Color theme selection and persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stylesheet keys every color off the `data-theme` attribute on
//! `<html>`, so the whole theme concern reduces to one [`Theme`] value:
//! `UiState` holds it, the header toggles it, this module maps it to the
//! attribute and to its localStorage slot. Resolution order on startup:
//! explicit stored choice, then the OS `prefers-color-scheme` hint, then
//! light. The enum and its codec are pure; only [`initial_theme`] and
//! [`switch_theme`] touch the browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage slot for the user's explicit choice.
#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "sigea_theme";

/// The two palettes the stylesheet ships.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute, also the persisted form.
    pub fn attr_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Decode a persisted value. Anything unrecognized reads as no choice,
    /// so a corrupted slot falls back to the OS hint.
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other palette.
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Glyph on the header toggle: each theme advertises the switch to the
    /// other one.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// Pick the theme from a stored choice and the OS hint.
pub fn choose(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or(if os_prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Theme to start the session with, applied to the document on the way out.
pub fn initial_theme() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let os_prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        let theme = choose(stored.as_deref(), os_prefers_dark);
        apply(theme);
        theme
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Switch to the other theme, recording the choice so it survives reloads.
pub fn switch_theme(current: Theme) -> Theme {
    let next = current.flipped();
    #[cfg(feature = "csr")]
    {
        apply(next);
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.attr_value());
        }
    }
    next
}

/// Stamp the theme onto `<html>` for the stylesheet to pick up.
#[cfg(feature = "csr")]
fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.attr_value());
    }
}
