use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET       /                      -> list
/// GET       /list                  -> list
/// GET       /new                   -> new_data
/// GET       /{id}/detail           -> detail
/// GET, POST /add                   -> show_add, add
/// GET       /edit/{id}             -> show_edit
/// POST      /edit                  -> edit
/// GET       /duplicate/{id}        -> duplicate
/// GET       /remove/{id}           -> remove
/// GET       /moveUp/{id}           -> move_up
/// GET       /moveDown/{id}         -> move_down
/// GET       /update                -> update_positions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list))
        .route("/list", get(movie::list))
        .route("/new", get(movie::new_data))
        .route("/{id}/detail", get(movie::detail))
        .route("/add", get(movie::show_add).post(movie::add))
        .route("/edit/{id}", get(movie::show_edit))
        .route("/edit", post(movie::edit))
        .route("/duplicate/{id}", get(movie::duplicate))
        .route("/remove/{id}", get(movie::remove))
        .route("/moveUp/{id}", get(movie::move_up))
        .route("/moveDown/{id}", get(movie::move_down))
        .route("/update", get(movie::update_positions))
}
