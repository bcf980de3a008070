//! Credential service: signup, signin and bearer-token authentication.
//!
//! Signin failures are deliberately indistinguishable: an unknown email and
//! a wrong password both produce `AuthError::InvalidCredentials`.

use chrono::Utc;
use shelf_types::auth::{AccessToken, AuthRequest, TokenClaims};
use shelf_types::error::{AuthError, RepositoryError};
use shelf_types::user::{User, UserId};

use crate::repository::user::UserRepository;
use crate::service::password::PasswordHasher;
use crate::service::token::TokenIssuer;

/// Identity established from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
}

/// Service owning account creation and credential checks.
///
/// Generic over the user store, the password hasher and the token issuer so
/// shelf-core never depends on shelf-infra.
pub struct AuthService<U: UserRepository, H: PasswordHasher, T: TokenIssuer> {
    users: U,
    hasher: H,
    tokens: T,
}

impl<U: UserRepository, H: PasswordHasher, T: TokenIssuer> AuthService<U, H, T> {
    pub fn new(users: U, hasher: H, tokens: T) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Create an account and return a token for it.
    ///
    /// The plaintext password is hashed before anything touches the store.
    pub async fn signup(&self, request: &AuthRequest) -> Result<AccessToken, AuthError> {
        let password_hash = self.hasher.hash(&request.password).await?;
        let now = Utc::now();

        let user = User {
            id: UserId::new(),
            email: request.email.clone(),
            password_hash,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::CredentialsTaken,
            other => AuthError::StorageError(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, "account created");
        self.tokens.issue(&user.id, &user.email)
    }

    /// Check email + password and return a fresh token.
    pub async fn signin(&self, request: &AuthRequest) -> Result<AccessToken, AuthError> {
        let user = self
            .users
            .get_by_email(&request.email)
            .await
            .map_err(|e| AuthError::StorageError(e.to_string()))?;

        let Some(user) = user else {
            // Pay for a full verify so an unknown email costs what a wrong password does.
            let _ = self
                .hasher
                .verify(&request.password, self.hasher.dummy_digest())
                .await;
            tracing::warn!("signin rejected");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&request.password, &user.password_hash)
            .await?
        {
            tracing::warn!(user_id = %user.id, "signin rejected");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "signed in");
        self.tokens.issue(&user.id, &user.email)
    }

    /// Resolve a bearer token into the identity it asserts.
    ///
    /// Only the signature and expiry are checked; the store is not consulted.
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims: TokenClaims = self.tokens.verify(token)?;
        let id = claims
            .user_id()
            .map_err(|_| AuthError::Unauthorized("token subject is not a user id".to_string()))?;
        Ok(AuthenticatedUser {
            id,
            email: claims.email,
        })
    }
}
