use super::*;

use crate::net::types::{Profile, Role};

fn profile() -> Profile {
    Profile {
        id: "u-1".into(),
        email: "ana@exemplo.com".into(),
        full_name: "Ana Souza".into(),
        role: Role::Student,
        avatar_url: None,
        class_name: None,
        subject: None,
    }
}

fn loading_state() -> AuthState {
    AuthState::default()
}

fn signed_out_state() -> AuthState {
    AuthState {
        loading: false,
        ..AuthState::default()
    }
}

fn signed_in_state() -> AuthState {
    AuthState {
        user: Some(profile()),
        loading: false,
        ..AuthState::default()
    }
}

fn recovery_state() -> AuthState {
    let mut state = signed_in_state();
    state.note_recovery();
    state
}

// ============================================================================
// Loading takes priority over everything
// ============================================================================

#[test]
fn loading_waits_on_every_route_kind() {
    let state = loading_state();
    for kind in [RouteKind::Login, RouteKind::AuthCard, RouteKind::Protected] {
        assert_eq!(decide(&state, kind), GateDecision::Wait);
    }
}

#[test]
fn loading_waits_even_when_recovery_is_pending() {
    let mut state = loading_state();
    state.note_recovery();
    assert_eq!(decide(&state, RouteKind::Protected), GateDecision::Wait);
}

// ============================================================================
// Signed out
// ============================================================================

#[test]
fn signed_out_renders_public_screens() {
    let state = signed_out_state();
    assert_eq!(decide(&state, RouteKind::Login), GateDecision::Render);
    assert_eq!(decide(&state, RouteKind::AuthCard), GateDecision::Render);
}

#[test]
fn signed_out_redirects_protected_to_login() {
    let state = signed_out_state();
    assert_eq!(decide(&state, RouteKind::Protected), GateDecision::RedirectLogin);
}

// ============================================================================
// Signed in
// ============================================================================

#[test]
fn signed_in_renders_protected_screens() {
    let state = signed_in_state();
    assert_eq!(decide(&state, RouteKind::Protected), GateDecision::Render);
}

#[test]
fn signed_in_is_bounced_home_from_public_screens() {
    let state = signed_in_state();
    assert_eq!(decide(&state, RouteKind::Login), GateDecision::RedirectHome);
    assert_eq!(decide(&state, RouteKind::AuthCard), GateDecision::RedirectHome);
}

// ============================================================================
// Password recovery exception
// ============================================================================

#[test]
fn recovery_keeps_the_auth_card_visible_while_signed_in() {
    let state = recovery_state();
    assert_eq!(decide(&state, RouteKind::AuthCard), GateDecision::Render);
}

#[test]
fn recovery_does_not_open_the_login_screen() {
    let state = recovery_state();
    assert_eq!(decide(&state, RouteKind::Login), GateDecision::RedirectHome);
}

#[test]
fn recovery_still_allows_protected_screens() {
    let state = recovery_state();
    assert_eq!(decide(&state, RouteKind::Protected), GateDecision::Render);
}

#[test]
fn clearing_recovery_restores_the_home_redirect() {
    let mut state = recovery_state();
    state.clear_recovery();
    assert_eq!(decide(&state, RouteKind::AuthCard), GateDecision::RedirectHome);
}
