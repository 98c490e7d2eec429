//! Handlers for the `/programs` resource.

use axum::extract::State;
use catalog_core::types::CatalogId;
use catalog_facade::models::Program;
use serde::Serialize;
use serde_json::json;

use super::{apply_row_action, require_id, require_no_id, required, FormMode, RowAction};
use crate::converters::{convert_program_additional_data, convert_program_additional_data_content};
use crate::error::AppResult;
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FormAction, ProgramFo};
use crate::mappers;
use crate::results::{process, process_results};
use crate::state::AppState;
use crate::view::Page;

const LIST_PATH: &str = "/programs/list";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgramView<'a> {
    #[serde(flatten)]
    program: &'a Program,
    additional_data: String,
    has_additional_data: bool,
}

impl<'a> From<&'a Program> for ProgramView<'a> {
    fn from(program: &'a Program) -> Self {
        Self {
            program,
            additional_data: convert_program_additional_data(program),
            has_additional_data: convert_program_additional_data_content(program),
        }
    }
}

fn list_redirect() -> Page {
    Page::redirect(LIST_PATH)
}

fn form_page(program: &ProgramFo, errors: &FieldErrors, mode: FormMode) -> Page {
    Page::view(
        "program/form",
        json!({
            "program": program,
            "errors": errors,
            "title": mode.title("program"),
            "action": mode.action(),
        }),
    )
}

/// GET /programs/new
pub async fn new_data(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.programs.new_data().await)?;
    Ok(list_redirect())
}

/// GET /programs, GET /programs/list
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let programs = state.facades.programs.get_all().await;
    let media_count = state.facades.programs.get_total_media_count().await;
    process_results(&[programs.events(), media_count.events()])?;

    let programs = programs.into_data().unwrap_or_default();
    let views: Vec<ProgramView> = programs.iter().map(ProgramView::from).collect();

    Ok(Page::view(
        "program/index",
        json!({
            "programs": views,
            "mediaCount": media_count.into_data().unwrap_or_default(),
            "title": "Programs",
        }),
    ))
}

/// GET /programs/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let program = required(state.facades.programs.get(id).await, "Program")?;

    Ok(Page::view(
        "program/detail",
        json!({
            "program": ProgramView::from(&program),
            "title": "Program detail",
        }),
    ))
}

/// GET /programs/add
pub async fn show_add() -> Page {
    form_page(&ProgramFo::default(), &FieldErrors::default(), FormMode::Add)
}

/// POST /programs/add
pub async fn add(State(state): State<AppState>, bound: BoundForm<ProgramFo>) -> AppResult<Page> {
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
        let program = mappers::program::map_back(&form)?;
        process(state.facades.programs.add(program).await)?;
    }
    Ok(list_redirect())
}

/// GET /programs/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let program = required(state.facades.programs.get(id).await, "Program")?;
    Ok(form_page(
        &mappers::program::map(&program),
        &FieldErrors::default(),
        FormMode::Edit,
    ))
}

/// POST /programs/edit
pub async fn edit(State(state): State<AppState>, bound: BoundForm<ProgramFo>) -> AppResult<Page> {
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
        required(state.facades.programs.get(id).await, "Program")?;
        let program = mappers::program::map_back(&form)?;
        process(state.facades.programs.update(program).await)?;
    }
    Ok(list_redirect())
}

async fn row_action(state: &AppState, id: CatalogId, action: RowAction) -> AppResult<Page> {
    apply_row_action::<Program, _>(&*state.facades.programs, id, action).await?;
    Ok(list_redirect())
}

/// GET /programs/duplicate/{id}
pub async fn duplicate(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Duplicate).await
}

/// GET /programs/remove/{id}
pub async fn remove(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Remove).await
}

/// GET /programs/moveUp/{id}
pub async fn move_up(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveUp).await
}

/// GET /programs/moveDown/{id}
pub async fn move_down(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveDown).await
}

/// GET /programs/update
pub async fn update_positions(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.programs.update_positions().await)?;
    Ok(list_redirect())
}
