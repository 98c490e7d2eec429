use axum::routing::{get, post};
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Routes mounted at `/genres`. There is no detail page.
///
/// ```text
/// GET       /                    -> list
/// GET       /list                -> list
/// GET       /new                 -> new_data
/// GET, POST /add                 -> show_add, add
/// GET       /edit/{id}           -> show_edit
/// POST      /edit                -> edit
/// GET       /duplicate/{id}      -> duplicate
/// GET       /remove/{id}         -> remove
/// GET       /moveUp/{id}         -> move_up
/// GET       /moveDown/{id}       -> move_down
/// GET       /update              -> update_positions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genre::list))
        .route("/list", get(genre::list))
        .route("/new", get(genre::new_data))
        .route("/add", get(genre::show_add).post(genre::add))
        .route("/edit/{id}", get(genre::show_edit))
        .route("/edit", post(genre::edit))
        .route("/duplicate/{id}", get(genre::duplicate))
        .route("/remove/{id}", get(genre::remove))
        .route("/moveUp/{id}", get(genre::move_up))
        .route("/moveDown/{id}", get(genre::move_down))
        .route("/update", get(genre::update_positions))
}
