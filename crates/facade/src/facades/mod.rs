//! Facade contracts the web layer talks to.
//!
//! - [`CatalogFacade`] -- top level entities (movies, shows, games, ...).
//! - [`ChildFacade`] -- entities owned by a parent (seasons, episodes, songs).
//! - [`entities`] -- per entity traits adding aggregate queries.
//! - [`AccountFacade`] -- login accounts.

pub mod entities;

use async_trait::async_trait;
use catalog_core::types::CatalogId;

use crate::models::Account;
use crate::result::FacadeResult;

pub use entities::{
    EpisodeFacade, GameFacade, GenreFacade, MovieFacade, MusicFacade, PictureFacade,
    ProgramFacade, SeasonFacade, ShowFacade, SongFacade,
};

/// Operations shared by every top level entity.
///
/// `get` returns an empty successful result when the id is unknown. The
/// mutating calls report unknown ids and illegal moves as error events.
#[async_trait]
pub trait CatalogFacade<T>: Send + Sync {
    /// Drop every entity of this kind (and their children).
    async fn new_data(&self) -> FacadeResult<()>;

    async fn get_all(&self) -> FacadeResult<Vec<T>>;

    async fn get(&self, id: CatalogId) -> FacadeResult<T>;

    /// Add a new entity. It must not carry an id.
    async fn add(&self, data: T) -> FacadeResult<()>;

    async fn update(&self, data: T) -> FacadeResult<()>;

    async fn remove(&self, id: CatalogId) -> FacadeResult<()>;

    async fn duplicate(&self, id: CatalogId) -> FacadeResult<()>;

    async fn move_up(&self, id: CatalogId) -> FacadeResult<()>;

    async fn move_down(&self, id: CatalogId) -> FacadeResult<()>;

    /// Renumber positions to `0..n` in the current order.
    async fn update_positions(&self) -> FacadeResult<()>;
}

/// Operations on entities that belong to a parent.
#[async_trait]
pub trait ChildFacade<T>: Send + Sync {
    async fn get(&self, id: CatalogId) -> FacadeResult<T>;

    /// Add a new child under `parent`. It must not carry an id.
    async fn add(&self, parent: CatalogId, data: T) -> FacadeResult<()>;

    async fn update(&self, data: T) -> FacadeResult<()>;

    async fn remove(&self, id: CatalogId) -> FacadeResult<()>;

    async fn duplicate(&self, id: CatalogId) -> FacadeResult<()>;

    async fn move_up(&self, id: CatalogId) -> FacadeResult<()>;

    async fn move_down(&self, id: CatalogId) -> FacadeResult<()>;

    /// Children of `parent` in position order.
    async fn find(&self, parent: CatalogId) -> FacadeResult<Vec<T>>;
}

#[async_trait]
pub trait AccountFacade: Send + Sync {
    async fn find_by_username(&self, username: &str) -> FacadeResult<Account>;
}
