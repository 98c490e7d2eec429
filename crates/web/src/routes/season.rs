use axum::routing::{get, post};
use axum::Router;

use crate::handlers::season;
use crate::state::AppState;

/// Routes mounted at `/shows/{show_id}/seasons`.
///
/// ```text
/// GET       /                                  -> list
/// GET       /list                              -> list
/// GET       /{season_id}/detail                -> detail
/// GET, POST /add                               -> show_add, add
/// GET       /edit/{id}                         -> show_edit
/// POST      /edit                              -> edit
/// GET       /duplicate/{id}                    -> duplicate
/// GET       /remove/{id}                       -> remove
/// GET       /moveUp/{id}                       -> move_up
/// GET       /moveDown/{id}                     -> move_down
/// *         /{season_id}/episodes/...          -> episode::router
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(season::list))
        .route("/list", get(season::list))
        .route("/{season_id}/detail", get(season::detail))
        .route("/add", get(season::show_add).post(season::add))
        .route("/edit/{id}", get(season::show_edit))
        .route("/edit", post(season::edit))
        .route("/duplicate/{id}", get(season::duplicate))
        .route("/remove/{id}", get(season::remove))
        .route("/moveUp/{id}", get(season::move_up))
        .route("/moveDown/{id}", get(season::move_down))
        .nest("/{season_id}/episodes", super::episode::router())
}
