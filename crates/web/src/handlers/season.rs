//! Handlers for the `/shows/{showId}/seasons` resource.

use axum::extract::State;
use catalog_core::language::Language;
use catalog_core::time::Time;
use catalog_core::types::CatalogId;
use catalog_facade::models::Season;
use serde::Serialize;
use serde_json::json;

use super::{
    apply_child_row_action, require_id, require_no_id, required, required_child, FormMode,
    RowAction,
};
use crate::converters::{convert_languages, convert_season_years};
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FormAction, SeasonFo};
use crate::mappers;
use crate::results::process;
use crate::state::AppState;
use crate::view::Page;

/// A season with the totals of its episodes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeasonData {
    season: Season,
    years: String,
    subtitles_text: String,
    episodes_count: usize,
    total_length: String,
}

async fn season_data(state: &AppState, season: Season) -> AppResult<SeasonData> {
    let episodes = process(
        state
            .facades
            .episodes
            .find(season.id.unwrap_or_default())
            .await,
    )?
    .unwrap_or_default();
    let total_length: i32 = episodes.iter().map(|episode| episode.length).sum();

    Ok(SeasonData {
        years: convert_season_years(&season),
        subtitles_text: convert_languages(&season.subtitles),
        episodes_count: episodes.len(),
        total_length: Time::new(total_length).to_string(),
        season,
    })
}

fn list_redirect(show_id: CatalogId) -> Page {
    Page::redirect(format!("/shows/{show_id}/seasons/list"))
}

async fn require_show(state: &AppState, show_id: CatalogId) -> AppResult<()> {
    required(state.facades.shows.get(show_id).await, "Show")?;
    Ok(())
}

fn form_page(show_id: CatalogId, season: &SeasonFo, errors: &FieldErrors, mode: FormMode) -> Page {
    Page::view(
        "season/form",
        json!({
            "season": season,
            "errors": errors,
            "show": show_id,
            "languages": Language::ALL,
            "subtitles": Language::SUBTITLES,
            "title": mode.title("season"),
            "action": mode.action(),
        }),
    )
}

/// GET /shows/{showId}/seasons, GET /shows/{showId}/seasons/list
pub async fn list(
    State(state): State<AppState>,
    AppPath(show_id): AppPath<CatalogId>,
) -> AppResult<Page> {
    require_show(&state, show_id).await?;
    let seasons = process(state.facades.seasons.find(show_id).await)?.unwrap_or_default();

    let mut data = Vec::with_capacity(seasons.len());
    for season in seasons {
        data.push(season_data(&state, season).await?);
    }

    Ok(Page::view(
        "season/index",
        json!({
            "seasons": data,
            "show": show_id,
            "title": "Seasons",
        }),
    ))
}

/// GET /shows/{showId}/seasons/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath((show_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_show(&state, show_id).await?;
    let season = required_child::<Season, _>(&*state.facades.seasons, show_id, id).await?;
    let data = season_data(&state, season).await?;

    Ok(Page::view(
        "season/detail",
        json!({
            "season": data,
            "show": show_id,
            "title": "Season detail",
        }),
    ))
}

/// GET /shows/{showId}/seasons/add
pub async fn show_add(
    State(state): State<AppState>,
    AppPath(show_id): AppPath<CatalogId>,
) -> AppResult<Page> {
    require_show(&state, show_id).await?;
    Ok(form_page(
        show_id,
        &SeasonFo::default(),
        &FieldErrors::default(),
        FormMode::Add,
    ))
}

/// POST /shows/{showId}/seasons/add
pub async fn add(
    State(state): State<AppState>,
    AppPath(show_id): AppPath<CatalogId>,
    bound: BoundForm<SeasonFo>,
) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_show(&state, show_id).await?;
    require_no_id(form.id)?;

    if action == FormAction::Create {
        if !errors.is_empty() {
            return Ok(form_page(show_id, &form, &errors, FormMode::Add));
        }
        let season = mappers::season::map_back(&form)?;
        process(state.facades.seasons.add(show_id, season).await)?;
    }
    Ok(list_redirect(show_id))
}

/// GET /shows/{showId}/seasons/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath((show_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_show(&state, show_id).await?;
    let season = required_child::<Season, _>(&*state.facades.seasons, show_id, id).await?;
    Ok(form_page(
        show_id,
        &mappers::season::map(&season),
        &FieldErrors::default(),
        FormMode::Edit,
    ))
}

/// POST /shows/{showId}/seasons/edit
pub async fn edit(
    State(state): State<AppState>,
    AppPath(show_id): AppPath<CatalogId>,
    bound: BoundForm<SeasonFo>,
) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_show(&state, show_id).await?;
    let id = require_id(form.id)?;

    if action == FormAction::Update {
        if !errors.is_empty() {
            return Ok(form_page(show_id, &form, &errors, FormMode::Edit));
        }
        required_child::<Season, _>(&*state.facades.seasons, show_id, id).await?;
        let season = mappers::season::map_back(&form)?;
        process(state.facades.seasons.update(season).await)?;
    }
    Ok(list_redirect(show_id))
}

async fn row_action(
    state: &AppState,
    show_id: CatalogId,
    id: CatalogId,
    action: RowAction,
) -> AppResult<Page> {
    require_show(state, show_id).await?;
    apply_child_row_action::<Season, _>(&*state.facades.seasons, show_id, id, action).await?;
    Ok(list_redirect(show_id))
}

/// GET /shows/{showId}/seasons/duplicate/{id}
pub async fn duplicate(
    State(state): State<AppState>,
    AppPath((show_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, show_id, id, RowAction::Duplicate).await
}

/// GET /shows/{showId}/seasons/remove/{id}
pub async fn remove(
    State(state): State<AppState>,
    AppPath((show_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, show_id, id, RowAction::Remove).await
}

/// GET /shows/{showId}/seasons/moveUp/{id}
pub async fn move_up(
    State(state): State<AppState>,
    AppPath((show_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, show_id, id, RowAction::MoveUp).await
}

/// GET /shows/{showId}/seasons/moveDown/{id}
pub async fn move_down(
    State(state): State<AppState>,
    AppPath((show_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, show_id, id, RowAction::MoveDown).await
}
