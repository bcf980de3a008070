//! HTTP/REST API layer for Shelf.
//!
//! Axum-based REST API with bearer-token authentication, validated JSON
//! bodies, and a uniform error envelope.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
