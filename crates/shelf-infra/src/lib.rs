//! Infrastructure layer for Shelf.
//!
//! Contains implementations of the ports defined in `shelf-core`: SQLite
//! storage, Argon2id password hashing, HS256 access tokens, and the
//! configuration loader.

pub mod config;
pub mod crypto;
pub mod sqlite;
