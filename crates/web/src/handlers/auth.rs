//! Login, logout and access-denied pages.

use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::auth::jwt::generate_session_token;
use crate::auth::password::verify_password;
use crate::auth::SESSION_COOKIE;
use crate::error::{access_denied_page, AppError, AppResult};
use crate::extract::AppForm;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::view::{Page, LOGIN_PATH};

const LOGIN_ERROR_PATH: &str = "/login/error";

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn login_page(error: bool) -> Page {
    Page::view("login", json!({ "title": "Login", "error": error }))
}

/// GET /login
pub async fn show_login() -> Page {
    login_page(false)
}

/// GET /login/error
pub async fn show_login_error() -> Page {
    login_page(true)
}

/// POST /login
///
/// Sets the session cookie and goes to the home page. Unknown accounts and
/// wrong passwords go to the login error page.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(input): AppForm<LoginRequest>,
) -> AppResult<(CookieJar, Page)> {
    let account = state
        .facades
        .accounts
        .find_by_username(&input.username)
        .await
        .into_data();

    let Some(account) = account else {
        tracing::info!(username = %input.username, "Login with unknown username");
        return Ok((jar, Page::redirect(LOGIN_ERROR_PATH)));
    };

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %account.username, "Login with wrong password");
        return Ok((jar, Page::redirect(LOGIN_ERROR_PATH)));
    }

    let token = generate_session_token(
        account.id,
        &account.username,
        &account.roles,
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    tracing::info!(username = %account.username, "Logged in");
    Ok((jar.add(cookie), Page::redirect("/")))
}

/// POST /logout
pub async fn logout(user: AuthUser, jar: CookieJar) -> (CookieJar, Page) {
    tracing::info!(username = %user.username, "Logged out");
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Page::redirect(LOGIN_PATH))
}

/// GET /access-denied
pub async fn access_denied(_user: AuthUser) -> Response {
    access_denied_page()
}
