use axum::routing::{get, post};
use axum::Router;

use crate::handlers::music;
use crate::state::AppState;

/// Routes mounted at `/music`.
///
/// ```text
/// GET       /                      -> list
/// GET       /list                  -> list
/// GET       /new                   -> new_data
/// GET       /{music_id}/detail     -> detail
/// GET, POST /add                   -> show_add, add
/// GET       /edit/{id}             -> show_edit
/// POST      /edit                  -> edit
/// GET       /duplicate/{id}        -> duplicate
/// GET       /remove/{id}           -> remove
/// GET       /moveUp/{id}           -> move_up
/// GET       /moveDown/{id}         -> move_down
/// GET       /update                -> update_positions
/// *         /{music_id}/songs/...  -> song::router
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(music::list))
        .route("/list", get(music::list))
        .route("/new", get(music::new_data))
        .route("/{music_id}/detail", get(music::detail))
        .route("/add", get(music::show_add).post(music::add))
        .route("/edit/{id}", get(music::show_edit))
        .route("/edit", post(music::edit))
        .route("/duplicate/{id}", get(music::duplicate))
        .route("/remove/{id}", get(music::remove))
        .route("/moveUp/{id}", get(music::move_up))
        .route("/moveDown/{id}", get(music::move_down))
        .route("/update", get(music::update_positions))
        .nest("/{music_id}/songs", super::song::router())
}
