//! Handlers for the `/shows` resource.

use axum::extract::State;
use catalog_core::imdb::has_imdb_code;
use catalog_core::time::Time;
use catalog_core::types::CatalogId;
use catalog_facade::models::Show;
use serde::Serialize;
use serde_json::json;

use super::{
    all_genres, apply_row_action, picture_ids, require_id, require_no_id, required,
    resolve_genres, FormMode, RowAction,
};
use crate::converters::{convert_genres, convert_imdb_code};
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FieldValue, FormAction, ShowFo};
use crate::mappers;
use crate::results::{process, process_results};
use crate::state::AppState;
use crate::view::Page;

const LIST_PATH: &str = "/shows/list";

/// A show with the totals of its seasons and episodes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowData {
    show: Show,
    genres_text: String,
    imdb_code_text: Option<String>,
    seasons_count: usize,
    episodes_count: usize,
    total_length: String,
}

async fn show_data(state: &AppState, show: Show) -> AppResult<ShowData> {
    let id = show.id.unwrap_or_default();
    let seasons = process(state.facades.seasons.find(id).await)?.unwrap_or_default();

    let mut episodes_count = 0;
    let mut total_length = 0;
    for season in &seasons {
        let episodes = process(
            state
                .facades
                .episodes
                .find(season.id.unwrap_or_default())
                .await,
        )?
        .unwrap_or_default();
        episodes_count += episodes.len();
        total_length += episodes.iter().map(|episode| episode.length).sum::<i32>();
    }

    Ok(ShowData {
        genres_text: convert_genres(&show.genres),
        imdb_code_text: has_imdb_code(show.imdb_code).then(|| convert_imdb_code(show.imdb_code)),
        seasons_count: seasons.len(),
        episodes_count,
        total_length: Time::new(total_length).to_string(),
        show,
    })
}

fn list_redirect() -> Page {
    Page::redirect(LIST_PATH)
}

async fn form_page(
    state: &AppState,
    show: &ShowFo,
    errors: &FieldErrors,
    mode: FormMode,
) -> AppResult<Page> {
    let pictures = picture_ids(state).await?;
    let genres = all_genres(state).await?;

    Ok(Page::view(
        "show/form",
        json!({
            "show": show,
            "errors": errors,
            "title": mode.title("show"),
            "pictures": pictures,
            "genres": genres,
            "action": mode.action(),
        }),
    ))
}

async fn process_form_action(
    state: &AppState,
    mut show: ShowFo,
    action: FormAction,
    mode: FormMode,
) -> AppResult<Page> {
    match action {
        FormAction::ChoosePicture => {}
        FormAction::RemovePicture => show.picture = FieldValue::Blank,
        _ => return Ok(list_redirect()),
    }
    form_page(state, &show, &FieldErrors::default(), mode).await
}

async fn show_from_form(state: &AppState, form: &ShowFo) -> AppResult<Show> {
    let mut show = mappers::show::map_back(form)?;
    let genre_ids = FieldValue::values(&form.genres, "genres")?;
    show.genres = resolve_genres(state, &genre_ids).await?;
    Ok(show)
}

/// GET /shows/new
pub async fn new_data(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.shows.new_data().await)?;
    Ok(list_redirect())
}

/// GET /shows, GET /shows/list
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let shows = state.facades.shows.get_all().await;
    let seasons_count = state.facades.shows.get_seasons_count().await;
    let episodes_count = state.facades.shows.get_episodes_count().await;
    let total_length = state.facades.shows.get_total_length().await;
    process_results(&[
        shows.events(),
        seasons_count.events(),
        episodes_count.events(),
        total_length.events(),
    ])?;

    let mut data = Vec::new();
    for show in shows.into_data().unwrap_or_default() {
        data.push(show_data(&state, show).await?);
    }

    Ok(Page::view(
        "show/index",
        json!({
            "shows": data,
            "seasonsCount": seasons_count.into_data().unwrap_or_default(),
            "episodesCount": episodes_count.into_data().unwrap_or_default(),
            "totalLength": total_length.into_data().unwrap_or_default().to_string(),
            "title": "Shows",
        }),
    ))
}

/// GET /shows/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let show = required(state.facades.shows.get(id).await, "Show")?;
    let data = show_data(&state, show).await?;

    Ok(Page::view(
        "show/detail",
        json!({
            "show": data,
            "title": "Show detail",
        }),
    ))
}

/// GET /shows/add
pub async fn show_add(State(state): State<AppState>) -> AppResult<Page> {
    form_page(&state, &ShowFo::default(), &FieldErrors::default(), FormMode::Add).await
}

/// POST /shows/add
pub async fn add(State(state): State<AppState>, bound: BoundForm<ShowFo>) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_no_id(form.id)?;

    if action != FormAction::Create {
        return process_form_action(&state, form, action, FormMode::Add).await;
    }
    if !errors.is_empty() {
        return form_page(&state, &form, &errors, FormMode::Add).await;
    }

    let show = show_from_form(&state, &form).await?;
    process(state.facades.shows.add(show).await)?;
    Ok(list_redirect())
}

/// GET /shows/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let show = required(state.facades.shows.get(id).await, "Show")?;
    form_page(
        &state,
        &mappers::show::map(&show),
        &FieldErrors::default(),
        FormMode::Edit,
    )
    .await
}

/// POST /shows/edit
pub async fn edit(State(state): State<AppState>, bound: BoundForm<ShowFo>) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    let id = require_id(form.id)?;

    if action != FormAction::Update {
        return process_form_action(&state, form, action, FormMode::Edit).await;
    }
    if !errors.is_empty() {
        return form_page(&state, &form, &errors, FormMode::Edit).await;
    }

    required(state.facades.shows.get(id).await, "Show")?;
    let show = show_from_form(&state, &form).await?;
    process(state.facades.shows.update(show).await)?;
    Ok(list_redirect())
}

/// GET /shows/duplicate/{id}
pub async fn duplicate(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Show, _>(&*state.facades.shows, id, RowAction::Duplicate).await?;
    Ok(list_redirect())
}

/// GET /shows/remove/{id}
pub async fn remove(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Show, _>(&*state.facades.shows, id, RowAction::Remove).await?;
    Ok(list_redirect())
}

/// GET /shows/moveUp/{id}
pub async fn move_up(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Show, _>(&*state.facades.shows, id, RowAction::MoveUp).await?;
    Ok(list_redirect())
}

/// GET /shows/moveDown/{id}
pub async fn move_down(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Show, _>(&*state.facades.shows, id, RowAction::MoveDown).await?;
    Ok(list_redirect())
}

/// GET /shows/update
pub async fn update_positions(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.shows.update_positions().await)?;
    Ok(list_redirect())
}
