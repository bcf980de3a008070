//! Cryptographic operations for Shelf.
//!
//! - `password`: Argon2id password digests
//! - `token`: HS256-signed access tokens

pub mod password;
pub mod token;
