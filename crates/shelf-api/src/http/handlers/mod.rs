//! REST API handler modules.

pub mod auth;
pub mod bookmark;
pub mod user;
