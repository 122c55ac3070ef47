//! Browser localStorage persistence for the platform session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session client saves the current session after every sign-in and
//! token refresh, and reloads it on startup so a page reload keeps the
//! user signed in. These helpers centralize the web-sys glue; on native
//! builds they are inert so state code stays testable.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::Session;

/// localStorage key for the persisted session JSON.
const STORAGE_KEY: &str = "sigea_session";

/// Load the persisted session, if any.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist `session`, replacing any previous value.
pub fn save_session(session: &Session) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}

/// Drop the persisted session.
pub fn clear_session() {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
