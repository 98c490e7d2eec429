//! Authentication and authorization middleware.
//!
//! - [`auth::AuthUser`] -- extracts the logged in account from the session cookie.
//! - [`rbac::CatalogUser`] -- requires the `ADMIN` or `USER` role.
//! - [`rbac::require_catalog_role`] -- the same check as a route layer.

pub mod auth;
pub mod rbac;
