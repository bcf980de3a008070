//! TokenIssuer trait for signed, time-limited access tokens.

use chrono::{DateTime, Utc};
use shelf_types::auth::{AccessToken, TokenClaims};
use shelf_types::error::AuthError;
use shelf_types::user::UserId;

/// Issues and verifies bearer tokens bound to a user id and email.
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `user_id`/`email` as if issued at `now`.
    ///
    /// Pure with respect to its inputs and the configured secret.
    fn issue_at(
        &self,
        user_id: &UserId,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError>;

    /// Sign a token issued at the current wall-clock time.
    fn issue(&self, user_id: &UserId, email: &str) -> Result<AccessToken, AuthError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Check the signature and expiry of `token` and return its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}
