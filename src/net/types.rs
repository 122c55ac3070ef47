//! Wire DTOs for the hosted platform's auth and data REST contracts.
//!
//! DESIGN
//! ======
//! These types mirror the platform payloads (GoTrue-style `/auth/v1/*` grants,
//! PostgREST-style `profiles` rows) so serde decoding stays lossless and every
//! caller shares one schema. The platform owns session and profile lifecycles;
//! this client only reads them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role, as stored in the `role` column of `profiles`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    #[default]
    Student,
    Kitchen,
    Library,
}

/// Roles offered by the public sign-up form. Administrative, kitchen and
/// library accounts are provisioned by an admin, never self-registered.
pub const SIGN_UP_ROLES: [Role; 2] = [Role::Student, Role::Teacher];

impl Role {
    /// Lowercase wire value, matching the `profiles.role` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Kitchen => "kitchen",
            Role::Library => "library",
        }
    }

    /// Display name shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administração",
            Role::Teacher => "Professor",
            Role::Student => "Estudante",
            Role::Kitchen => "Cozinha",
            Role::Library => "Biblioteca",
        }
    }

    /// Route of this role's dashboard.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Teacher => "/teacher",
            Role::Student => "/student",
            Role::Kitchen => "/kitchen",
            Role::Library => "/library",
        }
    }

    /// Parse a lowercase wire value, e.g. from a query parameter.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            "kitchen" => Some(Role::Kitchen),
            "library" => Some(Role::Library),
            _ => None,
        }
    }
}

/// A `profiles` row: the application-level record describing a user.
///
/// Exactly zero or one rows exist per auth user id; the row is materialized
/// by the platform from sign-up metadata on account confirmation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Auth user id (UUID string), primary key.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name collected at sign-up.
    pub full_name: String,
    /// Account role driving dashboard selection.
    pub role: Role,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// School class, for student accounts.
    #[serde(default, rename = "class")]
    pub class_name: Option<String>,
    /// Taught subject, for teacher accounts.
    #[serde(default)]
    pub subject: Option<String>,
}

/// The principal a session belongs to, as embedded in grant responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Auth user id (UUID string).
    pub id: String,
    /// Account email, when the platform includes it.
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated session: opaque proof of authentication plus the
/// bookkeeping needed to refresh it before expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on authenticated calls.
    pub access_token: String,
    /// One-shot token exchanged for a new session at `grant_type=refresh_token`.
    pub refresh_token: String,
    /// Access-token expiry as unix seconds.
    pub expires_at: i64,
    /// Owning principal.
    pub user: SessionUser,
}

impl Session {
    /// Whether the access token expires within `leeway_secs` of `now_ms`
    /// (milliseconds since the unix epoch, i.e. `js_sys::Date::now()`).
    pub fn expires_within(&self, leeway_secs: i64, now_ms: f64) -> bool {
        let now_secs = (now_ms / 1000.0) as i64;
        self.expires_at - now_secs <= leeway_secs
    }

    /// Whether the access token has already expired at `now_ms`.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.expires_within(0, now_ms)
    }
}

/// A successful grant payload from the token or signup endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// Seconds until expiry, relative to issuance.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Absolute expiry as unix seconds; newer platform versions include it.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Refresh token for the next grant.
    pub refresh_token: String,
    /// Owning principal.
    pub user: SessionUser,
}

/// Fallback token lifetime when a grant carries neither `expires_at` nor
/// `expires_in` (the platform default access-token TTL).
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Convert a grant payload into a [`Session`], anchoring relative expiry to
/// `now_secs` (unix seconds at the time the response was received).
pub fn session_from_token_response(resp: TokenResponse, now_secs: i64) -> Session {
    let expires_at = resp
        .expires_at
        .unwrap_or_else(|| now_secs + resp.expires_in.unwrap_or(DEFAULT_TOKEN_TTL_SECS));
    Session {
        access_token: resp.access_token,
        refresh_token: resp.refresh_token,
        expires_at,
        user: resp.user,
    }
}

/// Structured failure from any external call.
///
/// Forms map kinds to user-facing Portuguese messages; the payload keeps the
/// platform's own wording for logs and generic toasts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The token endpoint rejected the email/password pair.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
    /// The platform rejected the request as malformed.
    #[error("validation rejected: {0}")]
    Validation(String),
    /// Transport failure or a server-side error status.
    #[error("service error: {0}")]
    NetworkOrService(String),
    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}
