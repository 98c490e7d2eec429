//! Handlers for the `/music/{musicId}/songs` resource.

use axum::extract::State;
use catalog_core::types::CatalogId;
use catalog_facade::models::Song;
use serde::Serialize;
use serde_json::json;

use super::{
    apply_child_row_action, require_id, require_no_id, required, required_child, FormMode,
    RowAction,
};
use crate::converters::convert_length;
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FormAction, SongFo};
use crate::mappers;
use crate::results::process;
use crate::state::AppState;
use crate::view::Page;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SongView<'a> {
    #[serde(flatten)]
    song: &'a Song,
    length_text: String,
}

impl<'a> From<&'a Song> for SongView<'a> {
    fn from(song: &'a Song) -> Self {
        Self {
            song,
            length_text: convert_length(song.length),
        }
    }
}

fn list_redirect(music_id: CatalogId) -> Page {
    Page::redirect(format!("/music/{music_id}/songs/list"))
}

async fn require_music(state: &AppState, music_id: CatalogId) -> AppResult<()> {
    required(state.facades.music.get(music_id).await, "Music")?;
    Ok(())
}

fn form_page(music_id: CatalogId, song: &SongFo, errors: &FieldErrors, mode: FormMode) -> Page {
    Page::view(
        "song/form",
        json!({
            "song": song,
            "errors": errors,
            "music": music_id,
            "title": mode.title("song"),
            "action": mode.action(),
        }),
    )
}

/// GET /music/{musicId}/songs, GET /music/{musicId}/songs/list
pub async fn list(
    State(state): State<AppState>,
    AppPath(music_id): AppPath<CatalogId>,
) -> AppResult<Page> {
    require_music(&state, music_id).await?;
    let songs = process(state.facades.songs.find(music_id).await)?.unwrap_or_default();
    let views: Vec<SongView> = songs.iter().map(SongView::from).collect();

    Ok(Page::view(
        "song/index",
        json!({
            "songs": views,
            "music": music_id,
            "title": "Songs",
        }),
    ))
}

/// GET /music/{musicId}/songs/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath((music_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_music(&state, music_id).await?;
    let song = required_child::<Song, _>(&*state.facades.songs, music_id, id).await?;

    Ok(Page::view(
        "song/detail",
        json!({
            "song": SongView::from(&song),
            "music": music_id,
            "title": "Song detail",
        }),
    ))
}

/// GET /music/{musicId}/songs/add
pub async fn show_add(
    State(state): State<AppState>,
    AppPath(music_id): AppPath<CatalogId>,
) -> AppResult<Page> {
    require_music(&state, music_id).await?;
    Ok(form_page(
        music_id,
        &SongFo::default(),
        &FieldErrors::default(),
        FormMode::Add,
    ))
}

/// POST /music/{musicId}/songs/add
pub async fn add(
    State(state): State<AppState>,
    AppPath(music_id): AppPath<CatalogId>,
    bound: BoundForm<SongFo>,
) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_music(&state, music_id).await?;
    require_no_id(form.id)?;

    if action == FormAction::Create {
        if !errors.is_empty() {
            return Ok(form_page(music_id, &form, &errors, FormMode::Add));
        }
        let song = mappers::song::map_back(&form)?;
        process(state.facades.songs.add(music_id, song).await)?;
    }
    Ok(list_redirect(music_id))
}

/// GET /music/{musicId}/songs/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath((music_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    require_music(&state, music_id).await?;
    let song = required_child::<Song, _>(&*state.facades.songs, music_id, id).await?;
    Ok(form_page(
        music_id,
        &mappers::song::map(&song),
        &FieldErrors::default(),
        FormMode::Edit,
    ))
}

/// POST /music/{musicId}/songs/edit
pub async fn edit(
    State(state): State<AppState>,
    AppPath(music_id): AppPath<CatalogId>,
    bound: BoundForm<SongFo>,
) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_music(&state, music_id).await?;
    let id = require_id(form.id)?;

    if action == FormAction::Update {
        if !errors.is_empty() {
            return Ok(form_page(music_id, &form, &errors, FormMode::Edit));
        }
        required_child::<Song, _>(&*state.facades.songs, music_id, id).await?;
        let song = mappers::song::map_back(&form)?;
        process(state.facades.songs.update(song).await)?;
    }
    Ok(list_redirect(music_id))
}

async fn row_action(
    state: &AppState,
    music_id: CatalogId,
    id: CatalogId,
    action: RowAction,
) -> AppResult<Page> {
    require_music(state, music_id).await?;
    apply_child_row_action::<Song, _>(&*state.facades.songs, music_id, id, action).await?;
    Ok(list_redirect(music_id))
}

/// GET /music/{musicId}/songs/duplicate/{id}
pub async fn duplicate(
    State(state): State<AppState>,
    AppPath((music_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, music_id, id, RowAction::Duplicate).await
}

/// GET /music/{musicId}/songs/remove/{id}
pub async fn remove(
    State(state): State<AppState>,
    AppPath((music_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, music_id, id, RowAction::Remove).await
}

/// GET /music/{musicId}/songs/moveUp/{id}
pub async fn move_up(
    State(state): State<AppState>,
    AppPath((music_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, music_id, id, RowAction::MoveUp).await
}

/// GET /music/{musicId}/songs/moveDown/{id}
pub async fn move_down(
    State(state): State<AppState>,
    AppPath((music_id, id)): AppPath<(CatalogId, CatalogId)>,
) -> AppResult<Page> {
    row_action(&state, music_id, id, RowAction::MoveDown).await
}
