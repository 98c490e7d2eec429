//! Media catalog web application.
//!
//! Exposes the building blocks (config, state, error handling, forms,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod auth;
pub mod config;
pub mod converters;
pub mod error;
pub mod extract;
pub mod forms;
pub mod handlers;
pub mod mappers;
pub mod middleware;
pub mod results;
pub mod router;
pub mod routes;
pub mod state;
pub mod view;
