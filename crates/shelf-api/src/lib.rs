//! Shelf application layer: REST API, CLI commands and service wiring.
//!
//! The `shelf` binary is a thin entry point over this library so the HTTP
//! router can be driven directly from integration tests.

pub mod cli;
pub mod http;
pub mod state;
