//! Request extractors for authentication and validated bodies.

pub mod auth;
pub mod json;
