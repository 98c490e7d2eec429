//! Handlers for the `/genres` resource. Genres have no detail page.

use axum::extract::State;
use catalog_core::types::CatalogId;
use catalog_facade::models::Genre;
use serde_json::json;

use super::{apply_row_action, require_id, require_no_id, required, FormMode, RowAction};
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FormAction, GenreFo};
use crate::mappers;
use crate::results::process;
use crate::state::AppState;
use crate::view::Page;

const LIST_PATH: &str = "/genres/list";

fn list_redirect() -> Page {
    Page::redirect(LIST_PATH)
}

fn form_page(genre: &GenreFo, errors: &FieldErrors, mode: FormMode) -> Page {
    Page::view(
        "genre/form",
        json!({
            "genre": genre,
            "errors": errors,
            "title": mode.title("genre"),
            "action": mode.action(),
        }),
    )
}

/// GET /genres/new
pub async fn new_data(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.genres.new_data().await)?;
    Ok(list_redirect())
}

/// GET /genres, GET /genres/list
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let genres = process(state.facades.genres.get_all().await)?.unwrap_or_default();

    Ok(Page::view(
        "genre/index",
        json!({
            "genres": genres,
            "title": "Genres",
        }),
    ))
}

/// GET /genres/add
pub async fn show_add() -> Page {
    form_page(&GenreFo::default(), &FieldErrors::default(), FormMode::Add)
}

/// POST /genres/add
pub async fn add(State(state): State<AppState>, bound: BoundForm<GenreFo>) -> AppResult<Page> {
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
        let genre = mappers::genre::map_back(&form)?;
        process(state.facades.genres.add(genre).await)?;
    }
    Ok(list_redirect())
}

/// GET /genres/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let genre = required(state.facades.genres.get(id).await, "Genre")?;
    Ok(form_page(
        &mappers::genre::map(&genre),
        &FieldErrors::default(),
        FormMode::Edit,
    ))
}

/// POST /genres/edit
pub async fn edit(State(state): State<AppState>, bound: BoundForm<GenreFo>) -> AppResult<Page> {
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
        required(state.facades.genres.get(id).await, "Genre")?;
        let genre = mappers::genre::map_back(&form)?;
        process(state.facades.genres.update(genre).await)?;
    }
    Ok(list_redirect())
}

async fn row_action(state: &AppState, id: CatalogId, action: RowAction) -> AppResult<Page> {
    apply_row_action::<Genre, _>(&*state.facades.genres, id, action).await?;
    Ok(list_redirect())
}

/// GET /genres/duplicate/{id}
pub async fn duplicate(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Duplicate).await
}

/// GET /genres/remove/{id}
pub async fn remove(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Remove).await
}

/// GET /genres/moveUp/{id}
pub async fn move_up(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveUp).await
}

/// GET /genres/moveDown/{id}
pub async fn move_down(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveDown).await
}

/// GET /genres/update
pub async fn update_positions(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.genres.update_positions().await)?;
    Ok(list_redirect())
}
