use super::*;

use crate::net::types::{Profile, Session, SessionUser};

fn profile(role: Role) -> Profile {
    Profile {
        id: "u-1".to_owned(),
        email: "ana@exemplo.com".to_owned(),
        full_name: "Ana Souza".to_owned(),
        role,
        avatar_url: None,
        class_name: None,
        subject: None,
    }
}

fn session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at: 2_000_000_000,
        user: SessionUser {
            id: "u-1".to_owned(),
            email: None,
        },
    }
}

#[test]
fn no_forward_while_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(forward_target(&state), None);
}

#[test]
fn no_forward_when_signed_out() {
    let mut state = AuthState::default();
    state.begin_resolve(None);
    assert_eq!(forward_target(&state), None);
}

#[test]
fn forwards_each_role_to_its_dashboard() {
    for (role, path) in [
        (Role::Admin, "/admin"),
        (Role::Teacher, "/teacher"),
        (Role::Student, "/student"),
        (Role::Kitchen, "/kitchen"),
        (Role::Library, "/library"),
    ] {
        let mut state = AuthState::default();
        let epoch = state.begin_resolve(Some(session()));
        state.finish_resolve(epoch, Ok(Some(profile(role))));
        assert_eq!(forward_target(&state), Some(path));
    }
}

#[test]
fn no_forward_mid_resolution() {
    let mut state = AuthState::default();
    state.begin_resolve(Some(session()));
    assert_eq!(forward_target(&state), None);
}
