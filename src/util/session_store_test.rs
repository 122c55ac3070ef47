#![cfg(not(feature = "csr"))]

use super::*;

use crate::net::types::{Session, SessionUser};

fn session() -> Session {
    Session {
        access_token: "at".into(),
        refresh_token: "rt".into(),
        expires_at: 1_000,
        user: SessionUser {
            id: "u-1".into(),
            email: Some("ana@exemplo.com".into()),
        },
    }
}

#[test]
fn load_is_none_in_native_tests() {
    assert!(load_session().is_none());
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_session(&session());
    clear_session();
    assert!(load_session().is_none());
}
