//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password verification.
//! - [`jwt`] -- session token generation and validation.

pub mod jwt;
pub mod password;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "catalog_session";
