//! # Taskbook Shared Library
//!
//! This crate contains the types, persistence layer, and business logic used
//! by the Taskbook API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and data structures
//! - `auth`: Authentication primitives (passwords, tokens, middleware)
//! - `db`: Connection pool and migrations
//! - `service`: Task service enforcing the ownership rules

pub mod auth;
pub mod db;
pub mod models;
pub mod service;

/// Current version of the Taskbook shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
