//! Business logic and repository trait definitions for Shelf.
//!
//! This crate defines the "ports" (repository, hashing and token traits) that
//! the infrastructure layer implements. It depends only on `shelf-types` --
//! never on `shelf-infra` or any database/IO crate.

pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
