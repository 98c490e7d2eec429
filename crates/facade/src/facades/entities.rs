use async_trait::async_trait;
use catalog_core::time::Time;

use super::{CatalogFacade, ChildFacade};
use crate::models::{Episode, Game, Genre, Movie, Music, Picture, Program, Season, Show, Song};
use crate::result::FacadeResult;

#[async_trait]
pub trait MovieFacade: CatalogFacade<Movie> {
    /// Number of media over all movies.
    async fn get_total_media_count(&self) -> FacadeResult<i32>;

    async fn get_total_length(&self) -> FacadeResult<Time>;
}

#[async_trait]
pub trait ShowFacade: CatalogFacade<Show> {
    async fn get_total_length(&self) -> FacadeResult<Time>;

    async fn get_seasons_count(&self) -> FacadeResult<i32>;

    async fn get_episodes_count(&self) -> FacadeResult<i32>;
}

#[async_trait]
pub trait MusicFacade: CatalogFacade<Music> {
    async fn get_total_media_count(&self) -> FacadeResult<i32>;

    async fn get_total_length(&self) -> FacadeResult<Time>;

    async fn get_songs_count(&self) -> FacadeResult<i32>;
}

#[async_trait]
pub trait GameFacade: CatalogFacade<Game> {
    async fn get_total_media_count(&self) -> FacadeResult<i32>;
}

#[async_trait]
pub trait ProgramFacade: CatalogFacade<Program> {
    async fn get_total_media_count(&self) -> FacadeResult<i32>;
}

pub trait GenreFacade: CatalogFacade<Genre> {}

impl<F: CatalogFacade<Genre> + ?Sized> GenreFacade for F {}

pub trait PictureFacade: CatalogFacade<Picture> {}

impl<F: CatalogFacade<Picture> + ?Sized> PictureFacade for F {}

/// Seasons of a show.
pub trait SeasonFacade: ChildFacade<Season> {}

impl<F: ChildFacade<Season> + ?Sized> SeasonFacade for F {}

/// Episodes of a season.
pub trait EpisodeFacade: ChildFacade<Episode> {}

impl<F: ChildFacade<Episode> + ?Sized> EpisodeFacade for F {}

/// Songs of a music album.
pub trait SongFacade: ChildFacade<Song> {}

impl<F: ChildFacade<Song> + ?Sized> SongFacade for F {}
