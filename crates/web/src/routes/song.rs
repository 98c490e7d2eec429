use axum::routing::{get, post};
use axum::Router;

use crate::handlers::song;
use crate::state::AppState;

/// Routes mounted at `/music/{music_id}/songs`.
///
/// ```text
/// GET       /                    -> list
/// GET       /list                -> list
/// GET       /{id}/detail         -> detail
/// GET, POST /add                 -> show_add, add
/// GET       /edit/{id}           -> show_edit
/// POST      /edit                -> edit
/// GET       /duplicate/{id}      -> duplicate
/// GET       /remove/{id}         -> remove
/// GET       /moveUp/{id}         -> move_up
/// GET       /moveDown/{id}       -> move_down
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(song::list))
        .route("/list", get(song::list))
        .route("/{id}/detail", get(song::detail))
        .route("/add", get(song::show_add).post(song::add))
        .route("/edit/{id}", get(song::show_edit))
        .route("/edit", post(song::edit))
        .route("/duplicate/{id}", get(song::duplicate))
        .route("/remove/{id}", get(song::remove))
        .route("/moveUp/{id}", get(song::move_up))
        .route("/moveDown/{id}", get(song::move_down))
}
