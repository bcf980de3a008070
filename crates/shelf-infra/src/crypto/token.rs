//! HS256 access tokens.
//!
//! Tokens carry the user id as `sub`, the email, and `iat`/`exp` timestamps.
//! The signing secret is held in a [`SecretString`] and only exposed to build
//! the encoding/decoding keys.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};

use shelf_core::service::token::TokenIssuer;
use shelf_types::auth::{ACCESS_TOKEN_TTL_MINUTES, AccessToken, TokenClaims};
use shelf_types::error::AuthError;
use shelf_types::user::UserId;

/// `TokenIssuer` backed by `jsonwebtoken` with a shared HMAC secret.
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    pub fn new(secret: SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_at(
        &self,
        user_id: &UserId,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(ACCESS_TOKEN_TTL_MINUTES)).timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Token(e.to_string()))?;
        Ok(AccessToken { access_token })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "access token rejected");
                AuthError::Unauthorized(e.to_string())
            })
    }
}
