//! Session cookie authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use catalog_core::types::CatalogId;

use crate::auth::jwt::validate_token;
use crate::auth::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated account extracted from the session cookie.
///
/// Rejects with [`AppError::Unauthenticated`], which redirects to the login
/// page.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub account_id: CatalogId,
    pub username: String,
    pub roles: Vec<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::Unauthenticated("Missing session cookie".into()))?;

        let claims = validate_token(&token, &state.config.jwt)
            .map_err(|_| AppError::Unauthenticated("Invalid or expired session".into()))?;

        Ok(AuthUser {
            account_id: claims.sub,
            username: claims.username,
            roles: claims.roles,
        })
    }
}
