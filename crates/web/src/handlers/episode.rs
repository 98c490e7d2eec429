//! Handlers for the `/shows/{showId}/seasons/{seasonId}/episodes` resource.

use axum::extract::State;
use catalog_core::types::CatalogId;
use catalog_facade::models::{Episode, Season};
use serde::Serialize;
use serde_json::json;

use super::{
    apply_child_row_action, require_id, require_no_id, required, required_child, FormMode,
    RowAction,
};
use crate::converters::convert_length;
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, EpisodeFo, FieldErrors, FormAction};
use crate::mappers;
use crate::results::process;
use crate::state::AppState;
use crate::view::Page;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EpisodeView<'a> {
    #[serde(flatten)]
    episode: &'a Episode,
    length_text: String,
}

impl<'a> From<&'a Episode> for EpisodeView<'a> {
    fn from(episode: &'a Episode) -> Self {
        Self {
            episode,
            length_text: convert_length(episode.length),
        }
    }
}

fn list_redirect(show_id: CatalogId, season_id: CatalogId) -> Page {
    Page::redirect(format!("/shows/{show_id}/seasons/{season_id}/episodes/list"))
}

/// The show must exist and own the season.
async fn require_season(state: &AppState, show_id: CatalogId, season_id: CatalogId) -> AppResult<()> {
    required(state.facades.shows.get(show_id).await, "Show")?;
    required_child::<Season, _>(&*state.facades.seasons, show_id, season_id).await?;
    Ok(())
}

fn form_page(
    show_id: CatalogId,
    season_id: CatalogId,
    episode: &EpisodeFo,
    errors: &FieldErrors,
    mode: FormMode,
) -> Page {
    Page::view(
        "episode/form",
        json!({
            "episode": episode,
            "errors": errors,
            "show": show_id,
            "season": season_id,
            "title": mode.title("episode"),
            "action": mode.action(),
        }),
    )
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes, GET .../episodes/list
pub async fn list(
    State(state): State<AppState>,
    AppPath((show_id, season_id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_season(&state, show_id, season_id).await?;
    let episodes = process(state.facades.episodes.find(season_id).await)?.unwrap_or_default();
    let views: Vec<EpisodeView> = episodes.iter().map(EpisodeView::from).collect();

    Ok(Page::view(
        "episode/index",
        json!({
            "episodes": views,
            "show": show_id,
            "season": season_id,
            "title": "Episodes",
        }),
    ))
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath((show_id, season_id, id)): AppPath<(CatalogId, CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_season(&state, show_id, season_id).await?;
    let episode =
        required_child::<Episode, _>(&*state.facades.episodes, season_id, id).await?;

    Ok(Page::view(
        "episode/detail",
        json!({
            "episode": EpisodeView::from(&episode),
            "show": show_id,
            "season": season_id,
            "title": "Episode detail",
        }),
    ))
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes/add
pub async fn show_add(
    State(state): State<AppState>,
    AppPath((show_id, season_id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_season(&state, show_id, season_id).await?;
    Ok(form_page(
        show_id,
        season_id,
        &EpisodeFo::default(),
        &FieldErrors::default(),
        FormMode::Add,
    ))
}

/// POST /shows/{showId}/seasons/{seasonId}/episodes/add
pub async fn add(
    State(state): State<AppState>,
    AppPath((show_id, season_id)): AppPath<(CatalogId, CatalogId)>,
    bound: BoundForm<EpisodeFo>,
) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_season(&state, show_id, season_id).await?;
    require_no_id(form.id)?;

    if action == FormAction::Create {
        if !errors.is_empty() {
            return Ok(form_page(show_id, season_id, &form, &errors, FormMode::Add));
        }
        let episode = mappers::episode::map_back(&form)?;
        process(state.facades.episodes.add(season_id, episode).await)?;
    }
    Ok(list_redirect(show_id, season_id))
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath((show_id, season_id, id)): AppPath<(CatalogId, CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_season(&state, show_id, season_id).await?;
    let episode =
        required_child::<Episode, _>(&*state.facades.episodes, season_id, id).await?;
    Ok(form_page(
        show_id,
        season_id,
        &mappers::episode::map(&episode),
        &FieldErrors::default(),
        FormMode::Edit,
    ))
}

/// POST /shows/{showId}/seasons/{seasonId}/episodes/edit
pub async fn edit(
    State(state): State<AppState>,
    AppPath((show_id, season_id)): AppPath<(CatalogId, CatalogId)>,
    bound: BoundForm<EpisodeFo>,
) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_season(&state, show_id, season_id).await?;
    let id = require_id(form.id)?;

    if action == FormAction::Update {
        if !errors.is_empty() {
            return Ok(form_page(show_id, season_id, &form, &errors, FormMode::Edit));
        }
        required_child::<Episode, _>(&*state.facades.episodes, season_id, id).await?;
        let episode = mappers::episode::map_back(&form)?;
        process(state.facades.episodes.update(episode).await)?;
    }
    Ok(list_redirect(show_id, season_id))
}

async fn row_action(
    state: &AppState,
    (show_id, season_id, id): (CatalogId, CatalogId, CatalogId),
    action: RowAction,
) -> AppResult<Page> {
    require_season(state, show_id, season_id).await?;
    apply_child_row_action::<Episode, _>(&*state.facades.episodes, season_id, id, action)
        .await?;
    Ok(list_redirect(show_id, season_id))
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes/duplicate/{id}
pub async fn duplicate(
    State(state): State<AppState>,
    AppPath(ids): AppPath<(CatalogId, CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, ids, RowAction::Duplicate).await
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes/remove/{id}
pub async fn remove(
    State(state): State<AppState>,
    AppPath(ids): AppPath<(CatalogId, CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, ids, RowAction::Remove).await
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes/moveUp/{id}
pub async fn move_up(
    State(state): State<AppState>,
    AppPath(ids): AppPath<(CatalogId, CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, ids, RowAction::MoveUp).await
}

/// GET /shows/{showId}/seasons/{seasonId}/episodes/moveDown/{id}
pub async fn move_down(
    State(state): State<AppState>,
    AppPath(ids): AppPath<(CatalogId, CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, ids, RowAction::MoveDown).await
}
