//! Shared domain types and rules for the media catalog.

pub mod error;
pub mod imdb;
pub mod language;
pub mod roles;
pub mod time;
pub mod types;
pub mod year;
