use super::*;

// ============================================================================
// Error message mapping
// ============================================================================

#[test]
fn bad_credentials_get_the_friendly_message() {
    let err = ApiError::InvalidCredentials("invalid login credentials".to_owned());
    assert_eq!(
        sign_in_error_message(&err),
        "Email ou senha inválidos. Por favor, verifique e tente novamente."
    );
}

#[test]
fn other_sign_in_failures_show_the_platform_wording() {
    let err = ApiError::NetworkOrService("fetch failed".to_owned());
    assert_eq!(sign_in_error_message(&err), "fetch failed");
}

#[test]
fn platform_message_strips_the_kind_prefix() {
    assert_eq!(
        platform_message(&ApiError::Validation("email rate limit exceeded".to_owned())),
        "email rate limit exceeded"
    );
    assert_eq!(
        platform_message(&ApiError::NotFound("no such user".to_owned())),
        "no such user"
    );
}

#[test]
fn each_validation_problem_has_a_title() {
    assert_eq!(sign_up_error_title(ValidationError::PasswordMismatch), "Erro no cadastro");
    assert_eq!(sign_up_error_title(ValidationError::EmailInvalid), "Email inválido");
    assert_eq!(sign_up_error_title(ValidationError::PasswordTooShort), "Senha muito curta");
}

// ============================================================================
// Sign-up roles offered by the form
// ============================================================================

#[test]
fn only_student_and_teacher_self_register() {
    assert_eq!(SIGN_UP_ROLES, [Role::Student, Role::Teacher]);
    assert!(!SIGN_UP_ROLES.contains(&Role::Admin));
}

#[test]
fn role_query_parameter_only_honors_offered_roles() {
    // Mirrors the preset-role filter: parseable but not offered roles fall
    // back to the default selector.
    let preset = Role::parse("admin").filter(|r| SIGN_UP_ROLES.contains(r));
    assert_eq!(preset, None);
    let preset = Role::parse("teacher").filter(|r| SIGN_UP_ROLES.contains(r));
    assert_eq!(preset, Some(Role::Teacher));
}
