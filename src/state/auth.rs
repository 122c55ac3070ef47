//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the single source of truth for "who is logged in and with
//! what role". It lives in one `RwSignal` provided from `App`; the session
//! client task (`net::session_client`) is its only writer, route gates and
//! user-aware components are its readers.
//!
//! Resolution is split into two pure transitions so the async glue stays
//! thin: `begin_resolve` runs before the profile lookup, `finish_resolve`
//! after it. Each resolution takes a monotonic epoch; a completion whose
//! epoch is no longer current is discarded, so an overlapping newer
//! resolution can never be overwritten by a stale fetch.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{ApiError, Profile, Role, Session};

/// Authentication state tracking the current user, session and loading
/// status, plus the password-recovery interrupt signal.
#[derive(Clone, Debug)]
pub struct AuthState {
    /// Profile of the signed-in user; set only after a successful profile
    /// fetch tied to a present session.
    pub user: Option<Profile>,
    /// Current session as last reported by the platform.
    pub session: Option<Session>,
    /// True while a resolution is in flight (and at startup, before the
    /// first resolution lands).
    pub loading: bool,
    /// Raised when the platform signals a password-recovery flow; the auth
    /// screen shows the set-new-password form while this is up.
    pub password_recovery: bool,
    /// Monotonic resolution token; bumped by every `begin_resolve`.
    pub epoch: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            session: None,
            loading: true,
            password_recovery: false,
            epoch: 0,
        }
    }
}

impl AuthState {
    /// Start resolving `session` as the new ground truth.
    ///
    /// An absent session completes immediately (signed-out view, nothing to
    /// fetch). A present session leaves `user` untouched until the profile
    /// lookup lands, and puts the state into `loading`.
    ///
    /// Returns the epoch to hand back to [`AuthState::finish_resolve`].
    pub fn begin_resolve(&mut self, session: Option<Session>) -> u64 {
        self.epoch += 1;
        if session.is_none() {
            self.user = None;
            self.session = None;
            self.loading = false;
        } else {
            self.session = session;
            self.loading = true;
        }
        self.epoch
    }

    /// Apply the outcome of the profile lookup started at `epoch`.
    ///
    /// Stale completions (a newer `begin_resolve` has run since) are ignored.
    /// A lookup error or an empty result both degrade to the signed-out view;
    /// `loading` always ends false for the current epoch, never stuck.
    pub fn finish_resolve(&mut self, epoch: u64, lookup: Result<Option<Profile>, ApiError>) {
        if epoch != self.epoch {
            return;
        }
        self.user = match lookup {
            Ok(Some(profile)) => Some(profile),
            Ok(None) | Err(_) => None,
        };
        self.loading = false;
    }

    /// Raise the password-recovery signal.
    pub fn note_recovery(&mut self) {
        self.password_recovery = true;
    }

    /// Lower the password-recovery signal.
    pub fn clear_recovery(&mut self) {
        self.password_recovery = false;
    }

    /// Whether a resolved user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the resolved user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
