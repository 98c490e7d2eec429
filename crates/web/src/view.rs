//! Pages returned by handlers.
//!
//! Templates are not rendered server-side; a view is the template name plus
//! the model it would be rendered with, serialized as JSON.

use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use serde_json::Value;

pub const ERROR_VIEW: &str = "errors";
pub const ACCESS_DENIED_VIEW: &str = "access-denied";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug)]
pub enum Page {
    View { name: String, model: Value },
    /// `303 See Other` to the given path.
    Redirect(String),
}

impl Page {
    pub fn view(name: impl Into<String>, model: Value) -> Self {
        Page::View {
            name: name.into(),
            model,
        }
    }

    pub fn redirect(path: impl Into<String>) -> Self {
        Page::Redirect(path.into())
    }
}

#[derive(Serialize)]
struct ViewBody<'a> {
    view: &'a str,
    model: &'a Value,
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        match self {
            Page::View { name, model } => axum::Json(ViewBody {
                view: &name,
                model: &model,
            })
            .into_response(),
            Page::Redirect(path) => Redirect::to(&path).into_response(),
        }
    }
}
