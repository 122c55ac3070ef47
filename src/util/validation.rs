//! Client-side credential validation for the sign-up and reset forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! These checks run before any network call; the resolver operations never
//! validate. Rules: password confirmation must match, minimum length 6, and
//! the email must have a `local@domain.tld` shape. Messages are the exact
//! Portuguese strings the forms show.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum accepted password length, enforced on sign-up and reset.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A client-side validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmailInvalid,
    PasswordTooShort,
    PasswordMismatch,
}

impl ValidationError {
    /// User-facing message for this failure.
    pub fn user_message(self) -> &'static str {
        match self {
            ValidationError::EmailInvalid => "Por favor, insira um endereço de e-mail válido.",
            ValidationError::PasswordTooShort => "A senha deve ter no mínimo 6 caracteres.",
            ValidationError::PasswordMismatch => "As senhas não coincidem.",
        }
    }
}

/// Shape check for emails: exactly one `@`, a non-empty local part, a domain
/// with an interior dot, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Validate sign-up input. Checks run in the order the form reports them:
/// confirmation match, then email shape, then length.
pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate a new password pair from the recovery form.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
