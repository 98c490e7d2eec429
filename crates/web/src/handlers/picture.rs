//! Handlers for the `/pictures` resource.
//!
//! Pictures are uploaded as multipart forms and served back as raw bytes.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use catalog_core::types::CatalogId;
use catalog_facade::models::Picture;
use serde_json::json;

use super::{apply_row_action, picture_ids, required, FormMode, RowAction};
use crate::error::{AppError, AppResult};
use crate::extract::{AppMultipart, AppPath};
use crate::results::process;
use crate::state::AppState;
use crate::view::Page;

const LIST_PATH: &str = "/pictures/list";

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

const CONTENT_TYPE: &str = "image/jpg";
const CONTENT_DISPOSITION: &str = "inline; filename=\"picture.jpg\"";

fn list_redirect() -> Page {
    Page::redirect(LIST_PATH)
}

/// The parts of a picture upload the handler cares about.
#[derive(Debug, Default)]
struct PictureUpload {
    content: Option<Bytes>,
    create: bool,
}

async fn read_upload(mut multipart: Multipart) -> AppResult<PictureUpload> {
    let mut upload = PictureUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some(FILE_FIELD) => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !data.is_empty() {
                    upload.content = Some(data);
                }
            }
            Some("create") => upload.create = true,
            _ => {}
        }
    }

    Ok(upload)
}

/// GET /pictures/new
pub async fn new_data(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.pictures.new_data().await)?;
    Ok(list_redirect())
}

/// GET /pictures, GET /pictures/list
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let pictures = picture_ids(&state).await?;

    Ok(Page::view(
        "picture/index",
        json!({
            "pictures": pictures,
            "title": "Pictures",
        }),
    ))
}

/// GET /pictures/{id}
///
/// Streams the stored image bytes.
pub async fn content(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<impl IntoResponse> {
    let picture = required(state.facades.pictures.get(id).await, "Picture")?;

    Ok((
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, CONTENT_DISPOSITION),
        ],
        picture.content,
    ))
}

/// GET /pictures/add
pub async fn show_add() -> Page {
    Page::view(
        "picture/form",
        json!({
            "title": FormMode::Add.title("picture"),
            "action": FormMode::Add.action(),
        }),
    )
}

/// POST /pictures/add
///
/// Cancelling, or creating without a file, goes straight back to the list.
pub async fn add(
    State(state): State<AppState>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<Page> {
    let upload = read_upload(multipart).await?;

    if let (true, Some(content)) = (upload.create, upload.content) {
        let picture = Picture {
            id: None,
            content: content.to_vec(),
            position: None,
        };
        process(state.facades.pictures.add(picture).await)?;
        tracing::debug!("Stored uploaded picture");
    }
    Ok(list_redirect())
}

async fn row_action(state: &AppState, id: CatalogId, action: RowAction) -> AppResult<Page> {
    apply_row_action::<Picture, _>(&*state.facades.pictures, id, action).await?;
    Ok(list_redirect())
}

/// GET /pictures/remove/{id}
pub async fn remove(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::Remove).await
}

/// GET /pictures/moveUp/{id}
pub async fn move_up(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveUp).await
}

/// GET /pictures/moveDown/{id}
pub async fn move_down(State(state): State<AppState>, AppPath(id): AppPath<CatalogId>) -> AppResult<Page> {
    row_action(&state, id, RowAction::MoveDown).await
}

/// GET /pictures/update
pub async fn update_positions(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.pictures.update_positions().await)?;
    Ok(list_redirect())
}
