//! In-memory facade implementations.
//!
//! Used by the binary when no external catalog service is wired in, and by
//! the integration tests.

mod accounts;
mod catalog;
mod stored;
mod table;

pub use accounts::MemoryAccounts;
pub use catalog::MemoryCatalog;
