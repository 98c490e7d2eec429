use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::picture;
use crate::state::AppState;

/// Largest accepted picture upload.
const MAX_PICTURE_BYTES: usize = 10 * 1024 * 1024;

/// Routes mounted at `/pictures`.
///
/// ```text
/// GET       /                    -> list
/// GET       /list                -> list
/// GET       /new                 -> new_data
/// GET       /{id}                -> content (image bytes)
/// GET, POST /add                 -> show_add, add (multipart)
/// GET       /remove/{id}         -> remove
/// GET       /moveUp/{id}         -> move_up
/// GET       /moveDown/{id}       -> move_down
/// GET       /update              -> update_positions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(picture::list))
        .route("/list", get(picture::list))
        .route("/new", get(picture::new_data))
        .route("/{id}", get(picture::content))
        .route(
            "/add",
            get(picture::show_add)
                .post(picture::add)
                .layer(DefaultBodyLimit::max(MAX_PICTURE_BYTES)),
        )
        .route("/remove/{id}", get(picture::remove))
        .route("/moveUp/{id}", get(picture::move_up))
        .route("/moveDown/{id}", get(picture::move_down))
        .route("/update", get(picture::update_positions))
}
