//! Pure parsing for the URL fragment the platform appends to email-link
//! redirects (`#access_token=...&refresh_token=...&type=recovery`).

/// Fallback lifetime when the fragment carries no expiry information.
const DEFAULT_REDIRECT_TTL_SECS: i64 = 3600;

/// Kind of email link that produced the redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Password-recovery link: the session is live but the user must set a
    /// new password before leaving the auth screen.
    Recovery,
    /// Account-confirmation link from sign-up.
    SignUp,
    /// Admin invite link.
    Invite,
    /// Passwordless login link.
    MagicLink,
    /// Anything else; treated as a plain sign-in.
    Unknown,
}

impl LinkKind {
    fn parse(raw: &str) -> LinkKind {
        match raw {
            "recovery" => LinkKind::Recovery,
            "signup" => LinkKind::SignUp,
            "invite" => LinkKind::Invite,
            "magiclink" => LinkKind::MagicLink,
            _ => LinkKind::Unknown,
        }
    }
}

/// Tokens delivered in the redirect fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: Option<i64>,
    pub expires_at: Option<i64>,
    pub link_kind: LinkKind,
}

impl RedirectTokens {
    /// Absolute expiry in unix seconds, preferring the platform's own value
    /// and anchoring the relative form to `now_secs`.
    pub fn absolute_expiry(&self, now_secs: i64) -> i64 {
        self.expires_at
            .unwrap_or_else(|| now_secs + self.expires_in.unwrap_or(DEFAULT_REDIRECT_TTL_SECS))
    }
}

/// Parse `location.hash` after an email-link redirect.
///
/// Returns `None` unless both tokens are present, which distinguishes a
/// platform redirect from ordinary navigation (no fragment, or an
/// unrelated one).
pub fn parse_redirect_fragment(hash: &str) -> Option<RedirectTokens> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    if raw.is_empty() {
        return None;
    }

    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut expires_at = None;
    let mut link_kind = LinkKind::Unknown;

    for pair in raw.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_owned()),
            "refresh_token" => refresh_token = Some(value.to_owned()),
            "expires_in" => expires_in = value.parse().ok(),
            "expires_at" => expires_at = value.parse().ok(),
            "type" => link_kind = LinkKind::parse(value),
            _ => {}
        }
    }

    Some(RedirectTokens {
        access_token: access_token?,
        refresh_token: refresh_token?,
        expires_in,
        expires_at,
        link_kind,
    })
}
