use serde_json::json;

use crate::view::Page;

/// GET /
pub async fn index() -> Page {
    Page::view("index", json!({ "title": "Catalog" }))
}
