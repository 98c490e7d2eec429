use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use catalog_core::error::CoreError;
use serde_json::json;

use crate::view::{ACCESS_DENIED_VIEW, ERROR_VIEW, LOGIN_PATH};

pub const ILLEGAL_ARGUMENT_MESSAGE: &str = "There was error in working with data.";
pub const ILLEGAL_REQUEST_MESSAGE: &str =
    "There was illegal changes in pages or call on non existing data.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "There was unexpected error.";

/// Application-level error type for HTTP handlers.
///
/// Every variant renders a page rather than a bare status: data errors show
/// the `errors` view, a missing session redirects to the login page and a
/// missing role shows the `access-denied` view.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid data passed to an operation, including failed facade results.
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// A request for data that does not exist (or does not belong together).
    #[error("Illegal request: {0}")]
    IllegalRequest(String),

    /// A body that could not be parsed at all.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No valid session.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// A session without the required role.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Outcome classes an [`AppError`] renders as.
enum Rendering {
    Error(StatusCode, &'static str),
    Login,
    AccessDenied,
}

impl AppError {
    fn rendering(&self) -> Rendering {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    Rendering::Error(StatusCode::NOT_FOUND, ILLEGAL_REQUEST_MESSAGE)
                }
                CoreError::Validation(_) | CoreError::IllegalArgument(_) => {
                    Rendering::Error(StatusCode::BAD_REQUEST, ILLEGAL_ARGUMENT_MESSAGE)
                }
                CoreError::Unauthorized(_) => Rendering::Login,
                CoreError::Forbidden(_) => Rendering::AccessDenied,
                CoreError::Internal(_) => {
                    Rendering::Error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE)
                }
            },
            AppError::IllegalArgument(_) | AppError::BadRequest(_) => {
                Rendering::Error(StatusCode::BAD_REQUEST, ILLEGAL_ARGUMENT_MESSAGE)
            }
            AppError::IllegalRequest(_) => {
                Rendering::Error(StatusCode::NOT_FOUND, ILLEGAL_REQUEST_MESSAGE)
            }
            AppError::Unauthenticated(_) => Rendering::Login,
            AppError::AccessDenied(_) => Rendering::AccessDenied,
            AppError::InternalError(_) => {
                Rendering::Error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.rendering() {
            Rendering::Error(status, message) => {
                tracing::error!(error = %self, status = status.as_u16(), "Request failed");
                error_page(status, message)
            }
            Rendering::Login => {
                tracing::debug!(error = %self, "Redirecting to login");
                Redirect::to(LOGIN_PATH).into_response()
            }
            Rendering::AccessDenied => {
                tracing::error!(error = %self, "Access denied");
                access_denied_page()
            }
        }
    }
}

/// The `errors` view with the given status.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "view": ERROR_VIEW,
        "model": {
            "errorMessage": message,
            "title": "Error",
            "inner": false,
        },
    });
    (status, axum::Json(body)).into_response()
}

pub fn access_denied_page() -> Response {
    let body = json!({
        "view": ACCESS_DENIED_VIEW,
        "model": { "title": "Access denied" },
    });
    (StatusCode::FORBIDDEN, axum::Json(body)).into_response()
}
