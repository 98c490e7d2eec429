//! Handlers for the `/music` resource.

use axum::extract::State;
use catalog_core::time::Time;
use catalog_core::types::CatalogId;
use catalog_facade::models::Music;
use serde::Serialize;
use serde_json::json;

use super::{apply_row_action, require_id, require_no_id, required, FormMode, RowAction};
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FormAction, MusicFo};
use crate::mappers;
use crate::results::{process, process_results};
use crate::state::AppState;
use crate::view::Page;

const LIST_PATH: &str = "/music/list";

/// An album with the totals of its songs.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MusicData {
    music: Music,
    songs_count: usize,
    total_length: String,
}

async fn music_data(state: &AppState, music: Music) -> AppResult<MusicData> {
    let songs = process(state.facades.songs.find(music.id.unwrap_or_default()).await)?
        .unwrap_or_default();
    let total_length: i32 = songs.iter().map(|song| song.length).sum();

    Ok(MusicData {
        songs_count: songs.len(),
        total_length: Time::new(total_length).to_string(),
        music,
    })
}

fn list_redirect() -> Page {
    Page::redirect(LIST_PATH)
}

fn form_page(music: &MusicFo, errors: &FieldErrors, mode: FormMode) -> Page {
    Page::view(
        "music/form",
        json!({
            "music": music,
            "errors": errors,
            "title": mode.title("music"),
            "action": mode.action(),
        }),
    )
}

/// GET /music/new
pub async fn new_data(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.music.new_data().await)?;
    Ok(list_redirect())
}

/// GET /music, GET /music/list
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let music = state.facades.music.get_all().await;
    let media_count = state.facades.music.get_total_media_count().await;
    let songs_count = state.facades.music.get_songs_count().await;
    let total_length = state.facades.music.get_total_length().await;
    process_results(&[
        music.events(),
        media_count.events(),
        songs_count.events(),
        total_length.events(),
    ])?;

    let mut data = Vec::new();
    for item in music.into_data().unwrap_or_default() {
        data.push(music_data(&state, item).await?);
    }

    Ok(Page::view(
        "music/index",
        json!({
            "music": data,
            "mediaCount": media_count.into_data().unwrap_or_default(),
            "songsCount": songs_count.into_data().unwrap_or_default(),
            "totalLength": total_length.into_data().unwrap_or_default().to_string(),
            "title": "Music",
        }),
    ))
}

/// GET /music/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let music = required(state.facades.music.get(id).await, "Music")?;
    let data = music_data(&state, music).await?;

    Ok(Page::view(
        "music/detail",
        json!({
            "music": data,
            "title": "Music detail",
        }),
    ))
}

/// GET /music/add
pub async fn show_add() -> Page {
    form_page(&MusicFo::default(), &FieldErrors::default(), FormMode::Add)
}

/// POST /music/add
pub async fn add(State(state): State<AppState>, bound: BoundForm<MusicFo>) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_no_id(form.id)?;

    if action == FormAction::Create {
        if !errors.is_empty() {
            return Ok(form_page(&form, &errors, FormMode::Add));
        }
        let music = mappers::music::map_back(&form)?;
        process(state.facades.music.add(music).await)?;
    }
    Ok(list_redirect())
}

/// GET /music/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let music = required(state.facades.music.get(id).await, "Music")?;
    Ok(form_page(
        &mappers::music::map(&music),
        &FieldErrors::default(),
        FormMode::Edit,
    ))
}

/// POST /music/edit
pub async fn edit(State(state): State<AppState>, bound: BoundForm<MusicFo>) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    let id = require_id(form.id)?;

    if action == FormAction::Update {
        if !errors.is_empty() {
            return Ok(form_page(&form, &errors, FormMode::Edit));
        }
        required(state.facades.music.get(id).await, "Music")?;
        let music = mappers::music::map_back(&form)?;
        process(state.facades.music.update(music).await)?;
    }
    Ok(list_redirect())
}

async fn row_action(state: &AppState, id: CatalogId, action: RowAction) -> AppResult<Page> {
    apply_row_action::<Music, _>(&*state.facades.music, id, action).await?;
    Ok(list_redirect())
}

/// GET /music/duplicate/{id}
pub async fn duplicate(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Duplicate).await
}

/// GET /music/remove/{id}
pub async fn remove(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Remove).await
}

/// GET /music/moveUp/{id}
pub async fn move_up(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveUp).await
}

/// GET /music/moveDown/{id}
pub async fn move_down(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveDown).await
}

/// GET /music/update
pub async fn update_positions(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.music.update_positions().await)?;
    Ok(list_redirect())
}
