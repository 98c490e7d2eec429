//! Handlers for the `/games` resource.

use axum::extract::State;
use catalog_core::types::CatalogId;
use catalog_facade::models::Game;
use serde::Serialize;
use serde_json::json;

use super::{apply_row_action, require_id, require_no_id, required, FormMode, RowAction};
use crate::converters::{convert_game_additional_data, convert_game_additional_data_content};
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FormAction, GameFo};
use crate::mappers;
use crate::results::{process, process_results};
use crate::state::AppState;
use crate::view::Page;

const LIST_PATH: &str = "/games/list";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GameView<'a> {
    #[serde(flatten)]
    game: &'a Game,
    additional_data: String,
    has_additional_data: bool,
}

impl<'a> From<&'a Game> for GameView<'a> {
    fn from(game: &'a Game) -> Self {
        Self {
            game,
            additional_data: convert_game_additional_data(game),
            has_additional_data: convert_game_additional_data_content(game),
        }
    }
}

fn list_redirect() -> Page {
    Page::redirect(LIST_PATH)
}

fn form_page(game: &GameFo, errors: &FieldErrors, mode: FormMode) -> Page {
    Page::view(
        "game/form",
        json!({
            "game": game,
            "errors": errors,
            "title": mode.title("game"),
            "action": mode.action(),
        }),
    )
}

/// GET /games/new
pub async fn new_data(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.games.new_data().await)?;
    Ok(list_redirect())
}

/// GET /games, GET /games/list
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let games = state.facades.games.get_all().await;
    let media_count = state.facades.games.get_total_media_count().await;
    process_results(&[games.events(), media_count.events()])?;

    let games = games.into_data().unwrap_or_default();
    let views: Vec<GameView> = games.iter().map(GameView::from).collect();

    Ok(Page::view(
        "game/index",
        json!({
            "games": views,
            "mediaCount": media_count.into_data().unwrap_or_default(),
            "title": "Games",
        }),
    ))
}

/// GET /games/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let game = required(state.facades.games.get(id).await, "Game")?;

    Ok(Page::view(
        "game/detail",
        json!({
            "game": GameView::from(&game),
            "title": "Game detail",
        }),
    ))
}

/// GET /games/add
pub async fn show_add() -> Page {
    form_page(&GameFo::default(), &FieldErrors::default(), FormMode::Add)
}

/// POST /games/add
pub async fn add(State(state): State<AppState>, bound: BoundForm<GameFo>) -> AppResult<Page> {
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
        let game = mappers::game::map_back(&form)?;
        process(state.facades.games.add(game).await)?;
    }
    Ok(list_redirect())
}

/// GET /games/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let game = required(state.facades.games.get(id).await, "Game")?;
    Ok(form_page(
        &mappers::game::map(&game),
        &FieldErrors::default(),
        FormMode::Edit,
    ))
}

/// POST /games/edit
pub async fn edit(State(state): State<AppState>, bound: BoundForm<GameFo>) -> AppResult<Page> {
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
        required(state.facades.games.get(id).await, "Game")?;
        let game = mappers::game::map_back(&form)?;
        process(state.facades.games.update(game).await)?;
    }
    Ok(list_redirect())
}

async fn row_action(state: &AppState, id: CatalogId, action: RowAction) -> AppResult<Page> {
    apply_row_action::<Game, _>(&*state.facades.games, id, action).await?;
    Ok(list_redirect())
}

/// GET /games/duplicate/{id}
pub async fn duplicate(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Duplicate).await
}

/// GET /games/remove/{id}
pub async fn remove(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Remove).await
}

/// GET /games/moveUp/{id}
pub async fn move_up(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveUp).await
}

/// GET /games/moveDown/{id}
pub async fn move_down(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveDown).await
}

/// GET /games/update
pub async fn update_positions(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.games.update_positions().await)?;
    Ok(list_redirect())
}
