use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Public login routes.
///
/// ```text
/// GET  /login           -> show_login
/// POST /login           -> login
/// GET  /login/error     -> show_login_error
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::show_login).post(auth::login))
        .route("/login/error", get(auth::show_login_error))
}

/// Routes open to any logged in account, with or without a catalog role.
///
/// ```text
/// POST /logout          -> logout
/// GET  /access-denied   -> access_denied
/// ```
pub fn session_router() -> Router<AppState> {
    Router::new()
        .route("/logout", post(auth::logout))
        .route("/access-denied", get(auth::access_denied))
}
