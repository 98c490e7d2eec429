pub mod auth;
pub mod episode;
pub mod game;
pub mod genre;
pub mod health;
pub mod movie;
pub mod music;
pub mod picture;
pub mod program;
pub mod season;
pub mod show;
pub mod song;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the catalog page tree. Every route here needs a catalog role.
///
/// Route hierarchy:
///
/// ```text
/// /                                                 home page
/// /movies/...                                       movies
/// /shows/...                                        shows
/// /shows/{show_id}/seasons/...                      seasons of a show
/// /shows/{show_id}/seasons/{season_id}/episodes/... episodes of a season
/// /games/...                                        games
/// /music/...                                        music
/// /music/{music_id}/songs/...                       songs of an album
/// /programs/...                                     programs
/// /pictures/...                                     pictures
/// /genres/...                                       genres
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::catalog::index))
        .nest("/movies", movie::router())
        .nest("/shows", show::router())
        .nest("/games", game::router())
        .nest("/music", music::router())
        .nest("/programs", program::router())
        .nest("/pictures", picture::router())
        .nest("/genres", genre::router())
}
