//! In-memory catalog facade.

use async_trait::async_trait;
use catalog_core::time::Time;
use catalog_core::types::CatalogId;
use tokio::sync::RwLock;

use super::stored::{CatalogState, Nested, Stored, TopLevel};
use super::table::{Direction, ShiftError};
use crate::facades::{
    CatalogFacade, ChildFacade, GameFacade, MovieFacade, MusicFacade, ProgramFacade, ShowFacade,
};
use crate::models::CatalogEntity;
use crate::result::FacadeResult;

/// Every catalog facade backed by process memory.
///
/// Writes take the state lock exclusively, so each call sees a consistent
/// catalog. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    state: RwLock<CatalogState>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

/* --------------------------------------------------------------------------
Error events
-------------------------------------------------------------------------- */

fn event_key<T: CatalogEntity>(suffix: &str) -> String {
    format!("{}_{suffix}", T::NAME.to_uppercase())
}

fn not_exist<T: CatalogEntity, R>() -> FacadeResult<R> {
    FacadeResult::error(
        event_key::<T>("NOT_EXIST"),
        format!("{} doesn't exist.", T::NAME),
    )
}

fn id_not_null<T: CatalogEntity, R>() -> FacadeResult<R> {
    FacadeResult::error(
        event_key::<T>("ID_NOT_NULL"),
        format!("ID of {} must be null.", T::NAME),
    )
}

fn id_null<T: CatalogEntity, R>() -> FacadeResult<R> {
    FacadeResult::error(
        event_key::<T>("ID_NULL"),
        format!("ID of {} mustn't be null.", T::NAME),
    )
}

/* --------------------------------------------------------------------------
Shared operations
-------------------------------------------------------------------------- */

fn insert<T: Stored>(
    state: &mut CatalogState,
    parent: Option<CatalogId>,
    mut data: T,
) -> FacadeResult<()> {
    if data.id().is_some() {
        return id_not_null::<T, _>();
    }
    T::prepare(state, &mut data);
    let id = T::table_mut(state).insert(parent, data);
    tracing::debug!(entity = T::NAME, id, ?parent, "Entity added");
    FacadeResult::ok(())
}

impl MemoryCatalog {
    async fn get_one<T: Stored>(&self, id: CatalogId) -> FacadeResult<T> {
        let state = self.state.read().await;
        match T::table(&state).get(id) {
            Some(item) => FacadeResult::ok(T::resolve(&state, item.clone())),
            None => FacadeResult::empty(),
        }
    }

    async fn group<T: Stored>(&self, parent: Option<CatalogId>) -> FacadeResult<Vec<T>> {
        let state = self.state.read().await;
        let items = T::table(&state)
            .group(parent)
            .into_iter()
            .map(|item| T::resolve(&state, item))
            .collect();
        FacadeResult::ok(items)
    }

    async fn replace<T: Stored>(&self, mut data: T) -> FacadeResult<()> {
        let Some(id) = data.id() else {
            return id_null::<T, _>();
        };
        let mut state = self.state.write().await;
        if !T::table(&state).contains(id) {
            return not_exist::<T, _>();
        }
        T::prepare(&mut state, &mut data);
        T::table_mut(&mut state).replace(data);
        tracing::debug!(entity = T::NAME, id, "Entity updated");
        FacadeResult::ok(())
    }

    async fn delete<T: Stored>(&self, id: CatalogId) -> FacadeResult<()> {
        let mut state = self.state.write().await;
        if !T::table(&state).contains(id) {
            return not_exist::<T, _>();
        }
        T::remove_children(&mut state, id);
        T::table_mut(&mut state).remove(id);
        tracing::debug!(entity = T::NAME, id, "Entity removed");
        FacadeResult::ok(())
    }

    async fn copy<T: Stored>(&self, id: CatalogId) -> FacadeResult<()> {
        let mut state = self.state.write().await;
        let table = T::table(&state);
        let Some(mut item) = table.get(id).cloned() else {
            return not_exist::<T, _>();
        };
        let parent = table.parent_of(id);

        item.set_id(None);
        let copy = T::table_mut(&mut state).insert(parent, item);
        T::duplicate_children(&mut state, id, copy);
        tracing::debug!(entity = T::NAME, id, copy, "Entity duplicated");
        FacadeResult::ok(())
    }

    async fn shift<T: Stored>(&self, id: CatalogId, direction: Direction) -> FacadeResult<()> {
        let mut state = self.state.write().await;
        match T::table_mut(&mut state).shift(id, direction) {
            Ok(()) => FacadeResult::ok(()),
            Err(ShiftError::NotFound) => not_exist::<T, _>(),
            Err(ShiftError::AtEdge) => match direction {
                Direction::Up => FacadeResult::error(
                    event_key::<T>("NOT_MOVABLE"),
                    format!("First {} can't be moved up.", T::NAME),
                ),
                Direction::Down => FacadeResult::error(
                    event_key::<T>("NOT_MOVABLE"),
                    format!("Last {} can't be moved down.", T::NAME),
                ),
            },
        }
    }

    async fn read<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> FacadeResult<R> {
        let state = self.state.read().await;
        FacadeResult::ok(f(&state))
    }
}

/* --------------------------------------------------------------------------
Facade contracts
-------------------------------------------------------------------------- */

#[async_trait]
impl<T: TopLevel> CatalogFacade<T> for MemoryCatalog {
    async fn new_data(&self) -> FacadeResult<()> {
        let mut state = self.state.write().await;
        T::clear(&mut state);
        tracing::debug!(entity = T::NAME, "Data cleared");
        FacadeResult::ok(())
    }

    async fn get_all(&self) -> FacadeResult<Vec<T>> {
        self.group(None).await
    }

    async fn get(&self, id: CatalogId) -> FacadeResult<T> {
        self.get_one(id).await
    }

    async fn add(&self, data: T) -> FacadeResult<()> {
        let mut state = self.state.write().await;
        insert(&mut state, None, data)
    }

    async fn update(&self, data: T) -> FacadeResult<()> {
        self.replace(data).await
    }

    async fn remove(&self, id: CatalogId) -> FacadeResult<()> {
        self.delete::<T>(id).await
    }

    async fn duplicate(&self, id: CatalogId) -> FacadeResult<()> {
        self.copy::<T>(id).await
    }

    async fn move_up(&self, id: CatalogId) -> FacadeResult<()> {
        self.shift::<T>(id, Direction::Up).await
    }

    async fn move_down(&self, id: CatalogId) -> FacadeResult<()> {
        self.shift::<T>(id, Direction::Down).await
    }

    async fn update_positions(&self) -> FacadeResult<()> {
        let mut state = self.state.write().await;
        T::table_mut(&mut state).renumber();
        FacadeResult::ok(())
    }
}

#[async_trait]
impl<T: Nested> ChildFacade<T> for MemoryCatalog {
    async fn get(&self, id: CatalogId) -> FacadeResult<T> {
        self.get_one(id).await
    }

    async fn add(&self, parent: CatalogId, data: T) -> FacadeResult<()> {
        let mut state = self.state.write().await;
        if !T::Parent::table(&state).contains(parent) {
            return not_exist::<T::Parent, _>();
        }
        insert(&mut state, Some(parent), data)
    }

    async fn update(&self, data: T) -> FacadeResult<()> {
        self.replace(data).await
    }

    async fn remove(&self, id: CatalogId) -> FacadeResult<()> {
        self.delete::<T>(id).await
    }

    async fn duplicate(&self, id: CatalogId) -> FacadeResult<()> {
        self.copy::<T>(id).await
    }

    async fn move_up(&self, id: CatalogId) -> FacadeResult<()> {
        self.shift::<T>(id, Direction::Up).await
    }

    async fn move_down(&self, id: CatalogId) -> FacadeResult<()> {
        self.shift::<T>(id, Direction::Down).await
    }

    async fn find(&self, parent: CatalogId) -> FacadeResult<Vec<T>> {
        self.group(Some(parent)).await
    }
}

#[async_trait]
impl MovieFacade for MemoryCatalog {
    async fn get_total_media_count(&self) -> FacadeResult<i32> {
        self.read(|state| state.movies.iter().map(|movie| movie.media.len() as i32).sum())
            .await
    }

    async fn get_total_length(&self) -> FacadeResult<Time> {
        self.read(|state| {
            state
                .movies
                .iter()
                .flat_map(|movie| &movie.media)
                .map(|medium| Time::new(medium.length))
                .sum()
        })
        .await
    }
}

#[async_trait]
impl ShowFacade for MemoryCatalog {
    async fn get_total_length(&self) -> FacadeResult<Time> {
        self.read(|state| {
            state
                .episodes
                .iter()
                .map(|episode| Time::new(episode.length))
                .sum()
        })
        .await
    }

    async fn get_seasons_count(&self) -> FacadeResult<i32> {
        self.read(|state| state.seasons.len() as i32).await
    }

    async fn get_episodes_count(&self) -> FacadeResult<i32> {
        self.read(|state| state.episodes.len() as i32).await
    }
}

#[async_trait]
impl MusicFacade for MemoryCatalog {
    async fn get_total_media_count(&self) -> FacadeResult<i32> {
        self.read(|state| state.music.iter().map(|music| music.media_count).sum())
            .await
    }

    async fn get_total_length(&self) -> FacadeResult<Time> {
        self.read(|state| state.songs.iter().map(|song| Time::new(song.length)).sum())
            .await
    }

    async fn get_songs_count(&self) -> FacadeResult<i32> {
        self.read(|state| state.songs.len() as i32).await
    }
}

#[async_trait]
impl GameFacade for MemoryCatalog {
    async fn get_total_media_count(&self) -> FacadeResult<i32> {
        self.read(|state| state.games.iter().map(|game| game.media_count).sum())
            .await
    }
}

#[async_trait]
impl ProgramFacade for MemoryCatalog {
    async fn get_total_media_count(&self) -> FacadeResult<i32> {
        self.read(|state| state.programs.iter().map(|program| program.media_count).sum())
            .await
    }
}
