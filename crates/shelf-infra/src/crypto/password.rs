//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` trait from `shelf-core` with the `argon2`
//! crate (RustCrypto ecosystem). Digests are PHC strings carrying their own
//! parameters and random salt, so verification needs nothing else.
//!
//! Argon2 is deliberately slow, so every call runs on Tokio's blocking pool.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier, Version};

use shelf_core::service::password::PasswordHasher;
use shelf_types::error::AuthError;

/// Fixed digest with the default parameters. Not derived from any password.
const DUMMY_DIGEST: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2hlbGYtZHVtbXktc2FsdA$QXGe7HScrrbs227iA1fRzoMRCF2jlRLx4qylM/bFet0";

/// Argon2id implementation of `PasswordHasher`.
///
/// Uses OWASP recommended parameters:
/// - 19 MiB memory (19456 KiB)
/// - 2 iterations
/// - 1 parallelism degree
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Create a hasher with the default (OWASP) parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_blocking(argon2: &Argon2<'_>, plaintext: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::Hashing)
}

fn verify_blocking(argon2: &Argon2<'_>, plaintext: &str, digest: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(digest).map_err(|_| AuthError::Hashing)?;
    match argon2.verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(_) => Err(AuthError::Hashing),
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(&argon2, &plaintext))
            .await
            .map_err(|_| AuthError::Hashing)?
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AuthError> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || verify_blocking(&argon2, &plaintext, &digest))
            .await
            .map_err(|_| AuthError::Hashing)?
    }

    fn dummy_digest(&self) -> &str {
        DUMMY_DIGEST
    }
}
