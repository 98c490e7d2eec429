use axum::routing::{get, post};
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET       /                      -> list
/// GET       /list                  -> list
/// GET       /new                   -> new_data
/// GET       /{show_id}/detail      -> detail
/// GET, POST /add                   -> show_add, add
/// GET       /edit/{id}             -> show_edit
/// POST      /edit                  -> edit
/// GET       /duplicate/{id}        -> duplicate
/// GET       /remove/{id}           -> remove
/// GET       /moveUp/{id}           -> move_up
/// GET       /moveDown/{id}         -> move_down
/// GET       /update                -> update_positions
/// *         /{show_id}/seasons/... -> season::router
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list))
        .route("/list", get(show::list))
        .route("/new", get(show::new_data))
        .route("/{show_id}/detail", get(show::detail))
        .route("/add", get(show::show_add).post(show::add))
        .route("/edit/{id}", get(show::show_edit))
        .route("/edit", post(show::edit))
        .route("/duplicate/{id}", get(show::duplicate))
        .route("/remove/{id}", get(show::remove))
        .route("/moveUp/{id}", get(show::move_up))
        .route("/moveDown/{id}", get(show::move_down))
        .route("/update", get(show::update_positions))
        .nest("/{show_id}/seasons", super::season::router())
}
