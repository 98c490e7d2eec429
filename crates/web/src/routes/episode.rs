use axum::routing::{get, post};
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/shows/{show_id}/seasons/{season_id}/episodes`.
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
        .route("/", get(episode::list))
        .route("/list", get(episode::list))
        .route("/{id}/detail", get(episode::detail))
        .route("/add", get(episode::show_add).post(episode::add))
        .route("/edit/{id}", get(episode::show_edit))
        .route("/edit", post(episode::edit))
        .route("/duplicate/{id}", get(episode::duplicate))
        .route("/remove/{id}", get(episode::remove))
        .route("/moveUp/{id}", get(episode::move_up))
        .route("/moveDown/{id}", get(episode::move_down))
}
