//! Local UI chrome state (dark mode, toast notifications).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of identity state (`auth`) so
//! notification and theming behavior can evolve independently of session
//! resolution.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast card.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast--info",
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

/// A single toast notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Client-generated id used for dismissal.
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
}

/// Visible toasts are capped; pushing beyond the cap drops the oldest.
const TOAST_LIMIT: usize = 3;

/// UI state for theming and the toast stack.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub toasts: Vec<Toast>,
}

impl UiState {
    /// Append a toast, evicting the oldest beyond [`TOAST_LIMIT`].
    /// Returns the new toast's id so timers can dismiss it later.
    pub fn push_toast(&mut self, kind: ToastKind, title: &str, message: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            title: title.to_owned(),
            message: message.to_owned(),
            kind,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with `id`, if it is still visible.
    pub fn dismiss_toast(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
