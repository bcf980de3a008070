//! PasswordHasher trait for one-way credential digests.
//!
//! Defined in shelf-core so the credential service can hash and verify
//! passwords without coupling to a specific algorithm. The Argon2 adapter
//! lives in shelf-infra.

use shelf_types::error::AuthError;

/// Abstraction over salted, one-way password hashing.
///
/// Both operations are async: real implementations are CPU-heavy and must
/// run off the async worker threads.
pub trait PasswordHasher: Send + Sync {
    /// Produce a self-describing digest (algorithm, parameters, salt, hash).
    fn hash(
        &self,
        plaintext: &str,
    ) -> impl std::future::Future<Output = Result<String, AuthError>> + Send;

    /// Check `plaintext` against a digest produced by [`PasswordHasher::hash`].
    ///
    /// A mismatch is `Ok(false)`; `Err` is reserved for unreadable digests.
    fn verify(
        &self,
        plaintext: &str,
        digest: &str,
    ) -> impl std::future::Future<Output = Result<bool, AuthError>> + Send;

    /// A well-formed digest unrelated to any account, using the same
    /// parameters as [`PasswordHasher::hash`].
    ///
    /// Signin verifies against it when the email is unknown so that both
    /// failure paths cost the same.
    fn dummy_digest(&self) -> &str;
}
