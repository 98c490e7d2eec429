//! Requests the extractors reject still render the error page.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, get, post_form, send};

async fn assert_bad_request(response: axum::http::Response<Body>, what: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{what}");
    let json = body_json(response).await;
    assert_eq!(json["view"], "errors", "{what}");
    assert_eq!(
        json["model"]["errorMessage"],
        "There was error in working with data.",
        "{what}"
    );
}

// ---------------------------------------------------------------------------
// Test: non numeric ids in the path are bad requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_path_ids() {
    let app = common::build_test_app();

    for uri in [
        "/movies/abc/detail",
        "/movies/edit/abc",
        "/movies/remove/x",
        "/pictures/abc",
        "/shows/x/seasons/list",
        "/shows/1/seasons/x/episodes/list",
        "/music/moveUp/first",
    ] {
        let response = get(&app, uri, &app.admin()).await;
        assert_bad_request(response, uri).await;
    }
}

// ---------------------------------------------------------------------------
// Test: a login form without a password is a bad request
// ---------------------------------------------------------------------------

#[tokio::test]
async fn incomplete_login_form() {
    let app = common::build_test_app();
    let response = post_form(&app, "/login", "username=admin", "").await;
    assert_bad_request(response, "login").await;
}

// ---------------------------------------------------------------------------
// Test: a picture upload that is not multipart is a bad request
// ---------------------------------------------------------------------------

#[tokio::test]
async fn picture_upload_without_multipart_body() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/pictures/add")
        .header(header::CONTENT_TYPE, "text/plain")
        .header(header::COOKIE, app.admin())
        .body(Body::from("not a picture"))
        .unwrap();
    let response = send(&app, request).await;
    assert_bad_request(response, "upload").await;
}
