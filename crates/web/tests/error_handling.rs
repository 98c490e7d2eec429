//! Tests for `AppError` → page mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! needed.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use catalog_core::error::CoreError;
use catalog_web::error::AppError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: illegal arguments render the error page with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn illegal_argument_renders_error_page() {
    let (status, json) = error_to_response(AppError::IllegalArgument("ID must be null.".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["view"], "errors");
    assert_eq!(json["model"]["errorMessage"], "There was error in working with data.");
    assert_eq!(json["model"]["title"], "Error");
    assert_eq!(json["model"]["inner"], false);
}

// ---------------------------------------------------------------------------
// Test: illegal requests render the error page with 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn illegal_request_renders_error_page() {
    let (status, json) = error_to_response(AppError::IllegalRequest("Movie doesn't exist.".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["model"]["errorMessage"],
        "There was illegal changes in pages or call on non existing data."
    );
}

// ---------------------------------------------------------------------------
// Test: core errors map onto the same pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_errors_map_to_pages() {
    let (status, _) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: 4,
    }))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        error_to_response(AppError::Core(CoreError::Validation("bad year".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: internal errors hide their detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_hides_detail() {
    let (status, json) = error_to_response(AppError::InternalError("secret detail".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["model"]["errorMessage"], "There was unexpected error.");
    assert!(!json.to_string().contains("secret detail"));
}

// ---------------------------------------------------------------------------
// Test: no session redirects to the login page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthenticated_redirects_to_login() {
    let response = AppError::Unauthenticated("Missing session cookie".into()).into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

// ---------------------------------------------------------------------------
// Test: a missing role renders the access-denied page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn access_denied_renders_page() {
    let (status, json) = error_to_response(AppError::AccessDenied("no role".into())).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["view"], "access-denied");
}
