use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/games`.
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
        .route("/", get(game::list))
        .route("/list", get(game::list))
        .route("/new", get(game::new_data))
        .route("/{id}/detail", get(game::detail))
        .route("/add", get(game::show_add).post(game::add))
        .route("/edit/{id}", get(game::show_edit))
        .route("/edit", post(game::edit))
        .route("/duplicate/{id}", get(game::duplicate))
        .route("/remove/{id}", get(game::remove))
        .route("/moveUp/{id}", get(game::move_up))
        .route("/moveDown/{id}", get(game::move_down))
        .route("/update", get(game::update_positions))
}
