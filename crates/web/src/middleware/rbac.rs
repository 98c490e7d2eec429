//! Role-based access control.

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use catalog_core::roles::has_catalog_role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `ADMIN` or `USER` role. Rejects with the access-denied page
/// otherwise.
pub struct CatalogUser(pub AuthUser);

impl FromRequestParts<AppState> for CatalogUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !has_catalog_role(&user.roles) {
            return Err(AppError::AccessDenied(format!(
                "{} has no catalog role",
                user.username
            )));
        }
        Ok(CatalogUser(user))
    }
}

/// Route layer guarding every catalog page.
pub async fn require_catalog_role(
    CatalogUser(user): CatalogUser,
    request: Request,
    next: Next,
) -> Response {
    tracing::trace!(user = %user.username, path = %request.uri().path(), "Authorized");
    next.run(request).await
}
