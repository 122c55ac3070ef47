use super::*;

use crate::net::types::SessionUser;
use futures::executor::block_on;

// ============================================================================
// Redirect fragment parsing
// ============================================================================

#[test]
fn parses_a_full_recovery_fragment() {
    let hash = "#access_token=at-123&expires_at=1700003600&expires_in=3600&refresh_token=rt-456&token_type=bearer&type=recovery";
    let tokens = parse_redirect_fragment(hash).unwrap();
    assert_eq!(tokens.access_token, "at-123");
    assert_eq!(tokens.refresh_token, "rt-456");
    assert_eq!(tokens.expires_in, Some(3600));
    assert_eq!(tokens.expires_at, Some(1_700_003_600));
    assert_eq!(tokens.link_kind, LinkKind::Recovery);
}

#[test]
fn classifies_signup_confirmation_links() {
    let hash = "#access_token=at&refresh_token=rt&type=signup";
    let tokens = parse_redirect_fragment(hash).unwrap();
    assert_eq!(tokens.link_kind, LinkKind::SignUp);
}

#[test]
fn missing_type_parses_as_unknown_kind() {
    let hash = "#access_token=at&refresh_token=rt";
    let tokens = parse_redirect_fragment(hash).unwrap();
    assert_eq!(tokens.link_kind, LinkKind::Unknown);
}

#[test]
fn fragment_without_both_tokens_is_not_a_redirect() {
    assert!(parse_redirect_fragment("#access_token=at&type=recovery").is_none());
    assert!(parse_redirect_fragment("#refresh_token=rt").is_none());
}

#[test]
fn ordinary_fragments_are_not_redirects() {
    assert!(parse_redirect_fragment("").is_none());
    assert!(parse_redirect_fragment("#").is_none());
    assert!(parse_redirect_fragment("#section-2").is_none());
}

#[test]
fn leading_hash_is_optional() {
    let tokens = parse_redirect_fragment("access_token=at&refresh_token=rt").unwrap();
    assert_eq!(tokens.access_token, "at");
}

// ============================================================================
// Expiry resolution
// ============================================================================

fn tokens(expires_in: Option<i64>, expires_at: Option<i64>) -> RedirectTokens {
    RedirectTokens {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_in,
        expires_at,
        link_kind: LinkKind::Recovery,
    }
}

#[test]
fn absolute_expiry_prefers_the_platform_value() {
    assert_eq!(tokens(Some(3600), Some(9_999)).absolute_expiry(100), 9_999);
}

#[test]
fn absolute_expiry_anchors_relative_lifetimes_to_now() {
    assert_eq!(tokens(Some(120), None).absolute_expiry(1_000), 1_120);
}

#[test]
fn absolute_expiry_falls_back_to_the_default_ttl() {
    assert_eq!(tokens(None, None).absolute_expiry(1_000), 4_600);
}

// ============================================================================
// Event outcomes
// ============================================================================

#[test]
fn sign_in_lowers_recovery_and_keeps_the_session() {
    let outcome = event_outcome(SessionEvent::SignedIn(session()));
    assert_eq!(outcome.recovery, RecoverySignal::Lower);
    assert_eq!(outcome.session, Some(session()));
}

#[test]
fn sign_out_lowers_recovery_and_drops_the_session() {
    let outcome = event_outcome(SessionEvent::SignedOut);
    assert_eq!(outcome.recovery, RecoverySignal::Lower);
    // No session means the stored one is cleared and resolution lands on
    // the signed-out view.
    assert_eq!(outcome.session, None);
}

#[test]
fn token_refresh_leaves_the_recovery_signal_alone() {
    let outcome = event_outcome(SessionEvent::TokenRefreshed(session()));
    assert_eq!(outcome.recovery, RecoverySignal::Keep);
    assert_eq!(outcome.session, Some(session()));
}

#[test]
fn recovery_link_raises_the_signal() {
    let outcome = event_outcome(SessionEvent::PasswordRecovery(session()));
    assert_eq!(outcome.recovery, RecoverySignal::Raise);
    assert_eq!(outcome.session, Some(session()));
}

#[test]
fn password_update_lowers_the_signal_and_keeps_the_session() {
    let outcome = event_outcome(SessionEvent::PasswordUpdated(session()));
    assert_eq!(outcome.recovery, RecoverySignal::Lower);
    assert_eq!(outcome.session, Some(session()));
}

#[test]
fn full_recovery_flow_raises_survives_refresh_then_lowers() {
    let mut state = crate::state::auth::AuthState::default();
    for event in [
        SessionEvent::PasswordRecovery(session()),
        SessionEvent::TokenRefreshed(session()),
        SessionEvent::PasswordUpdated(session()),
    ] {
        let raised_before = state.password_recovery;
        match event_outcome(event.clone()).recovery {
            RecoverySignal::Raise => state.note_recovery(),
            RecoverySignal::Lower => state.clear_recovery(),
            RecoverySignal::Keep => {}
        }
        match event {
            SessionEvent::PasswordRecovery(_) => assert!(state.password_recovery),
            SessionEvent::TokenRefreshed(_) => {
                assert_eq!(state.password_recovery, raised_before);
            }
            _ => assert!(!state.password_recovery),
        }
    }
    // A later sign-in stays out of recovery.
    match event_outcome(SessionEvent::SignedIn(session())).recovery {
        RecoverySignal::Raise => state.note_recovery(),
        RecoverySignal::Lower => state.clear_recovery(),
        RecoverySignal::Keep => {}
    }
    assert!(!state.password_recovery);
}

// ============================================================================
// Operations off the browser
// ============================================================================

fn session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at: 1_000,
        user: SessionUser {
            id: "u-1".to_owned(),
            email: None,
        },
    }
}

#[test]
fn native_sign_in_reports_the_stubbed_transport() {
    let result = block_on(sign_in(SessionSender::default(), "ana@exemplo.com", "secret"));
    assert!(matches!(result, Err(ApiError::NetworkOrService(_))));
}

#[test]
fn native_sign_up_reports_the_stubbed_transport() {
    let result = block_on(sign_up(
        SessionSender::default(),
        "ana@exemplo.com",
        "secret",
        "Ana Souza",
        Role::Student,
    ));
    assert!(matches!(result, Err(ApiError::NetworkOrService(_))));
}

#[test]
fn native_sign_out_completes_without_a_channel() {
    block_on(sign_out(SessionSender::default(), Some(session())));
    block_on(sign_out(SessionSender::default(), None));
}

#[test]
fn native_password_reset_reports_the_stubbed_transport() {
    let result = block_on(complete_password_reset(
        SessionSender::default(),
        session(),
        "new-secret",
    ));
    assert!(matches!(result, Err(ApiError::NetworkOrService(_))));
}
