//! Page handlers, one module per catalog resource.
//!
//! Handlers fetch data through the facades in [`AppState`], check every
//! result with [`process`] and answer with a [`Page`].

pub mod auth;
pub mod catalog;
pub mod episode;
pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod picture;
pub mod program;
pub mod season;
pub mod show;
pub mod song;

use catalog_core::types::CatalogId;
use catalog_facade::facades::{CatalogFacade, ChildFacade};
use catalog_facade::models::{CatalogEntity, Genre};
use catalog_facade::result::FacadeResult;

use crate::error::{AppError, AppResult};
use crate::results::process;
use crate::state::AppState;

/// Form page variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    pub fn action(self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Edit => "edit",
        }
    }

    /// `"Add movie"`, `"Edit movie"`, ...
    pub fn title(self, entity: &str) -> String {
        match self {
            FormMode::Add => format!("Add {entity}"),
            FormMode::Edit => format!("Edit {entity}"),
        }
    }
}

/// Single-row operations reachable from list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Duplicate,
    Remove,
    MoveUp,
    MoveDown,
}

pub fn not_exist(entity: &str) -> AppError {
    AppError::IllegalRequest(format!("{entity} doesn't exist."))
}

/// Data of a lookup that must have found something.
pub fn required<T>(result: FacadeResult<T>, entity: &str) -> AppResult<T> {
    process(result)?.ok_or_else(|| not_exist(entity))
}

/// Forms posted to an add page must not carry an id.
pub fn require_no_id(id: Option<CatalogId>) -> AppResult<()> {
    match id {
        None => Ok(()),
        Some(_) => Err(AppError::IllegalArgument("ID must be null.".into())),
    }
}

/// Forms posted to an edit page must carry an id.
pub fn require_id(id: Option<CatalogId>) -> AppResult<CatalogId> {
    id.ok_or_else(|| AppError::IllegalArgument("ID mustn't be null.".into()))
}

/// Run a row action on an entity that must exist.
pub async fn apply_row_action<T, F>(facade: &F, id: CatalogId, action: RowAction) -> AppResult<()>
where
    T: CatalogEntity,
    F: CatalogFacade<T> + ?Sized,
{
    required(facade.get(id).await, T::NAME)?;
    let result = match action {
        RowAction::Duplicate => facade.duplicate(id).await,
        RowAction::Remove => facade.remove(id).await,
        RowAction::MoveUp => facade.move_up(id).await,
        RowAction::MoveDown => facade.move_down(id).await,
    };
    process(result)?;
    Ok(())
}

/// A child that must exist and belong to `parent`.
pub async fn required_child<T, F>(facade: &F, parent: CatalogId, id: CatalogId) -> AppResult<T>
where
    T: CatalogEntity,
    F: ChildFacade<T> + ?Sized,
{
    let children = process(facade.find(parent).await)?.unwrap_or_default();
    children
        .into_iter()
        .find(|child| child.id() == Some(id))
        .ok_or_else(|| not_exist(T::NAME))
}

/// Run a row action on a child that must belong to `parent`.
pub async fn apply_child_row_action<T, F>(
    facade: &F,
    parent: CatalogId,
    id: CatalogId,
    action: RowAction,
) -> AppResult<()>
where
    T: CatalogEntity,
    F: ChildFacade<T> + ?Sized,
{
    required_child(facade, parent, id).await?;
    let result = match action {
        RowAction::Duplicate => facade.duplicate(id).await,
        RowAction::Remove => facade.remove(id).await,
        RowAction::MoveUp => facade.move_up(id).await,
        RowAction::MoveDown => facade.move_down(id).await,
    };
    process(result)?;
    Ok(())
}

/// Look up the genres picked in a form.
pub async fn resolve_genres(state: &AppState, ids: &[CatalogId]) -> AppResult<Vec<Genre>> {
    let mut genres = Vec::with_capacity(ids.len());
    for id in ids {
        genres.push(required(state.facades.genres.get(*id).await, Genre::NAME)?);
    }
    Ok(genres)
}

/// Every genre, for the genre pickers of movie and show forms.
pub async fn all_genres(state: &AppState) -> AppResult<Vec<Genre>> {
    Ok(process(state.facades.genres.get_all().await)?.unwrap_or_default())
}

/// Ids of every stored picture, for the picture pickers.
pub async fn picture_ids(state: &AppState) -> AppResult<Vec<CatalogId>> {
    let pictures = process(state.facades.pictures.get_all().await)?.unwrap_or_default();
    Ok(pictures.iter().filter_map(|picture| picture.id).collect())
}
