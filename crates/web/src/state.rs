use std::sync::Arc;

use catalog_facade::facades::{
    AccountFacade, EpisodeFacade, GameFacade, GenreFacade, MovieFacade, MusicFacade,
    PictureFacade, ProgramFacade, SeasonFacade, ShowFacade, SongFacade,
};
use catalog_facade::memory::{MemoryAccounts, MemoryCatalog};
use catalog_facade::models::Account;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub facades: Facades,
}

/// The facade for every catalog entity.
#[derive(Clone)]
pub struct Facades {
    pub movies: Arc<dyn MovieFacade>,
    pub shows: Arc<dyn ShowFacade>,
    pub seasons: Arc<dyn SeasonFacade>,
    pub episodes: Arc<dyn EpisodeFacade>,
    pub games: Arc<dyn GameFacade>,
    pub music: Arc<dyn MusicFacade>,
    pub songs: Arc<dyn SongFacade>,
    pub programs: Arc<dyn ProgramFacade>,
    pub pictures: Arc<dyn PictureFacade>,
    pub genres: Arc<dyn GenreFacade>,
    pub accounts: Arc<dyn AccountFacade>,
}

impl Facades {
    /// Facades backed by one shared in-memory catalog.
    pub fn in_memory(accounts: Vec<Account>) -> Self {
        let catalog = Arc::new(MemoryCatalog::new());
        Self {
            movies: catalog.clone(),
            shows: catalog.clone(),
            seasons: catalog.clone(),
            episodes: catalog.clone(),
            games: catalog.clone(),
            music: catalog.clone(),
            songs: catalog.clone(),
            programs: catalog.clone(),
            pictures: catalog.clone(),
            genres: catalog,
            accounts: Arc::new(MemoryAccounts::new(accounts)),
        }
    }
}
