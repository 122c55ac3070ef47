use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("aluno@escola.br"));
    assert!(is_valid_email("maria.souza@rede.escola.br"));
    assert!(is_valid_email("a@b.c"));
}

#[test]
fn rejects_missing_at_or_empty_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("escola.br"));
    assert!(!is_valid_email("@escola.br"));
    assert!(!is_valid_email("aluno@"));
}

#[test]
fn rejects_domains_without_interior_dot() {
    assert!(!is_valid_email("aluno@escola"));
    assert!(!is_valid_email("aluno@.br"));
    assert!(!is_valid_email("aluno@escola."));
}

#[test]
fn rejects_whitespace_and_double_at() {
    assert!(!is_valid_email("alu no@escola.br"));
    assert!(!is_valid_email("aluno@esc ola.br"));
    assert!(!is_valid_email("aluno@escola.br "));
    assert!(!is_valid_email("a@b@c.br"));
}

// =============================================================
// Sign-up validation
// =============================================================

#[test]
fn sign_up_accepts_valid_input() {
    assert_eq!(validate_sign_up("aluno@escola.br", "segredo", "segredo"), Ok(()));
}

#[test]
fn sign_up_rejects_mismatched_passwords_first() {
    // Mismatch is reported even when the email is also bad.
    assert_eq!(
        validate_sign_up("not-an-email", "segredo", "segredo2"),
        Err(ValidationError::PasswordMismatch)
    );
}

#[test]
fn sign_up_rejects_bad_email_before_length() {
    assert_eq!(
        validate_sign_up("not-an-email", "abc", "abc"),
        Err(ValidationError::EmailInvalid)
    );
}

#[test]
fn sign_up_rejects_short_password() {
    assert_eq!(
        validate_sign_up("aluno@escola.br", "cinco", "cinco"),
        Err(ValidationError::PasswordTooShort)
    );
}

#[test]
fn sign_up_accepts_exactly_minimum_length() {
    assert_eq!(validate_sign_up("aluno@escola.br", "seisss", "seisss"), Ok(()));
}

// =============================================================
// New-password validation
// =============================================================

#[test]
fn new_password_checks_match_then_length() {
    assert_eq!(validate_new_password("novo-segredo", "novo-segredo"), Ok(()));
    assert_eq!(
        validate_new_password("abc", "abd"),
        Err(ValidationError::PasswordMismatch)
    );
    assert_eq!(
        validate_new_password("abc", "abc"),
        Err(ValidationError::PasswordTooShort)
    );
}

// =============================================================
// Messages
// =============================================================

#[test]
fn user_messages_are_the_shipped_portuguese_strings() {
    assert_eq!(
        ValidationError::PasswordMismatch.user_message(),
        "As senhas não coincidem."
    );
    assert_eq!(
        ValidationError::PasswordTooShort.user_message(),
        "A senha deve ter no mínimo 6 caracteres."
    );
    assert_eq!(
        ValidationError::EmailInvalid.user_message(),
        "Por favor, insira um endereço de e-mail válido."
    );
}
