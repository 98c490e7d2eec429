//! Facade layer of the media catalog.
//!
//! The web layer only depends on the traits in [`facades`]; [`memory`]
//! provides an implementation that keeps everything in process memory.

pub mod facades;
pub mod memory;
pub mod models;
pub mod result;
