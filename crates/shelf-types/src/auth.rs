//! Credential payloads and access token types.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::user::UserId;

/// Lifetime of an issued access token.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 60;

/// Email + password body shared by signup and signin.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl AuthRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep plaintext passwords out of logs and panic messages.
impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token handed back by signup and signin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

/// Signed payload carried inside an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id (string form of the UUID).
    pub sub: String,
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Parse the subject back into a [`UserId`].
    pub fn user_id(&self) -> Result<UserId, uuid::Error> {
        self.sub.parse()
    }
}
