use axum::routing::{get, post};
use axum::Router;

use crate::handlers::program;
use crate::state::AppState;

/// Routes mounted at `/programs`.
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
        .route("/", get(program::list))
        .route("/list", get(program::list))
        .route("/new", get(program::new_data))
        .route("/{id}/detail", get(program::detail))
        .route("/add", get(program::show_add).post(program::add))
        .route("/edit/{id}", get(program::show_edit))
        .route("/edit", post(program::edit))
        .route("/duplicate/{id}", get(program::duplicate))
        .route("/remove/{id}", get(program::remove))
        .route("/moveUp/{id}", get(program::move_up))
        .route("/moveDown/{id}", get(program::move_down))
        .route("/update", get(program::update_positions))
}
