//! Shared domain types for Shelf.
//!
//! This crate contains the core domain types used across the Shelf service:
//! User, Bookmark, access tokens, request payloads, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod auth;
pub mod bookmark;
pub mod config;
pub mod error;
pub mod user;
pub mod validation;
