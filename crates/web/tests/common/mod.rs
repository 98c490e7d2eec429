#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_facade::facades::CatalogFacade;
use catalog_facade::models::{Account, Genre};
use catalog_web::auth::jwt::{generate_session_token, JwtConfig};
use catalog_web::auth::password::hash_password;
use catalog_web::auth::SESSION_COOKIE;
use catalog_web::config::ServerConfig;
use catalog_web::router::build_app_router;
use catalog_web::state::{AppState, Facades};

pub const PASSWORD: &str = "correct-horse";

/// Build a test `ServerConfig` with safe defaults and no accounts.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        static_dir: "static".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough".to_string(),
            session_expiry_mins: 60,
        },
        accounts: Vec::new(),
    }
}

/// `admin` holds the `ADMIN` role, `guest` only an unrelated `GUEST` role.
/// Both use [`PASSWORD`].
pub fn test_accounts() -> Vec<Account> {
    let hash = hash_password(PASSWORD).unwrap();
    vec![
        Account {
            id: 1,
            username: "admin".to_string(),
            password_hash: hash.clone(),
            roles: vec!["ADMIN".to_string()],
        },
        Account {
            id: 2,
            username: "guest".to_string(),
            password_hash: hash,
            roles: vec!["GUEST".to_string()],
        },
    ]
}

/// The router together with the facades behind it, so tests can seed data.
pub struct TestApp {
    pub router: Router,
    pub facades: Facades,
    pub config: ServerConfig,
}

/// Build the full application router over an empty in-memory catalog.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack production uses.
pub fn build_test_app() -> TestApp {
    let mut config = test_config();
    config.accounts = test_accounts();
    let facades = Facades::in_memory(config.accounts.clone());

    let state = AppState {
        config: Arc::new(config.clone()),
        facades: facades.clone(),
    };

    TestApp {
        router: build_app_router(state, &config),
        facades,
        config,
    }
}

impl TestApp {
    /// A `Cookie` header value carrying a session with the given roles.
    pub fn session(&self, roles: &[&str]) -> String {
        let roles: Vec<String> = roles.iter().map(|role| role.to_string()).collect();
        let token = generate_session_token(1, "admin", &roles, &self.config.jwt).unwrap();
        format!("{SESSION_COOKIE}={token}")
    }

    pub fn admin(&self) -> String {
        self.session(&["ADMIN"])
    }

    pub async fn add_genre(&self, name: &str) {
        let result = self
            .facades
            .genres
            .add(Genre {
                id: None,
                name: name.to_string(),
                position: None,
            })
            .await;
        assert!(result.events().is_empty(), "seeding genre failed");
    }
}

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

/// GET without a session.
pub async fn get_anonymous(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get(app: &TestApp, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: &TestApp, uri: &str, body: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
}
