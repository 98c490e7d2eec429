//! Table selection and cascade rules per entity kind.

use catalog_core::types::CatalogId;

use super::table::Table;
use crate::models::{
    CatalogEntity, Episode, Game, Genre, Movie, Music, Picture, Program, Season, Show, Song,
};

#[derive(Debug, Default)]
pub struct CatalogState {
    pub genres: Table<Genre>,
    pub pictures: Table<Picture>,
    pub movies: Table<Movie>,
    pub shows: Table<Show>,
    pub seasons: Table<Season>,
    pub episodes: Table<Episode>,
    pub games: Table<Game>,
    pub music: Table<Music>,
    pub songs: Table<Song>,
    pub programs: Table<Program>,
    next_medium_id: CatalogId,
}

impl CatalogState {
    fn next_medium_id(&mut self) -> CatalogId {
        self.next_medium_id += 1;
        self.next_medium_id
    }

    /// Current copies of the referenced genres; removed genres are dropped.
    fn resolve_genres(&self, genres: &[Genre]) -> Vec<Genre> {
        genres
            .iter()
            .filter_map(|genre| genre.id.and_then(|id| self.genres.get(id)))
            .cloned()
            .collect()
    }

    fn resolve_picture(&self, picture: Option<CatalogId>) -> Option<CatalogId> {
        picture.filter(|id| self.pictures.contains(*id))
    }
}

pub trait Stored: CatalogEntity {
    fn table(state: &CatalogState) -> &Table<Self>;

    fn table_mut(state: &mut CatalogState) -> &mut Table<Self>;

    /// Fill in nested ids before the entity is stored.
    fn prepare(_state: &mut CatalogState, _item: &mut Self) {}

    /// Refresh references to other entities before handing a copy out.
    fn resolve(_state: &CatalogState, item: Self) -> Self {
        item
    }

    fn remove_children(_state: &mut CatalogState, _id: CatalogId) {}

    fn duplicate_children(_state: &mut CatalogState, _source: CatalogId, _copy: CatalogId) {}
}

/// Entities without a parent.
pub trait TopLevel: Stored {
    /// Drop every entity of this kind together with their children.
    fn clear(state: &mut CatalogState) {
        Self::table_mut(state).clear();
    }
}

/// Entities stored under a parent of kind `Parent`.
pub trait Nested: Stored {
    type Parent: Stored;
}

macro_rules! stored {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Stored for $ty {
                fn table(state: &CatalogState) -> &Table<Self> {
                    &state.$field
                }

                fn table_mut(state: &mut CatalogState) -> &mut Table<Self> {
                    &mut state.$field
                }
            }
        )+
    };
}

stored! {
    Genre => genres,
    Picture => pictures,
    Game => games,
    Program => programs,
    Episode => episodes,
    Song => songs,
}

impl TopLevel for Genre {}
impl TopLevel for Picture {}
impl TopLevel for Game {}
impl TopLevel for Program {}

impl Nested for Episode {
    type Parent = Season;
}

impl Nested for Song {
    type Parent = Music;
}

/* --------------------------------------------------------------------------
Movies
-------------------------------------------------------------------------- */

impl Stored for Movie {
    fn table(state: &CatalogState) -> &Table<Self> {
        &state.movies
    }

    fn table_mut(state: &mut CatalogState) -> &mut Table<Self> {
        &mut state.movies
    }

    fn prepare(state: &mut CatalogState, item: &mut Self) {
        for medium in item.media.iter_mut().filter(|medium| medium.id.is_none()) {
            medium.id = Some(state.next_medium_id());
        }
    }

    fn resolve(state: &CatalogState, mut item: Self) -> Self {
        item.genres = state.resolve_genres(&item.genres);
        item.picture = state.resolve_picture(item.picture);
        item
    }

    fn duplicate_children(state: &mut CatalogState, _source: CatalogId, copy: CatalogId) {
        let Some(mut movie) = state.movies.get(copy).cloned() else {
            return;
        };
        for medium in &mut movie.media {
            medium.id = Some(state.next_medium_id());
        }
        state.movies.replace(movie);
    }
}

impl TopLevel for Movie {}

/* --------------------------------------------------------------------------
Shows, seasons
-------------------------------------------------------------------------- */

impl Stored for Show {
    fn table(state: &CatalogState) -> &Table<Self> {
        &state.shows
    }

    fn table_mut(state: &mut CatalogState) -> &mut Table<Self> {
        &mut state.shows
    }

    fn resolve(state: &CatalogState, mut item: Self) -> Self {
        item.genres = state.resolve_genres(&item.genres);
        item.picture = state.resolve_picture(item.picture);
        item
    }

    fn remove_children(state: &mut CatalogState, id: CatalogId) {
        for season in state.seasons.remove_group(id) {
            Season::remove_children(state, season);
        }
    }

    fn duplicate_children(state: &mut CatalogState, source: CatalogId, copy: CatalogId) {
        for season in state.seasons.group(Some(source)) {
            let Some(original) = season.id else {
                continue;
            };
            let duplicate = state.seasons.insert(Some(copy), season);
            Season::duplicate_children(state, original, duplicate);
        }
    }
}

impl TopLevel for Show {
    fn clear(state: &mut CatalogState) {
        state.shows.clear();
        state.seasons.clear();
        state.episodes.clear();
    }
}

impl Stored for Season {
    fn table(state: &CatalogState) -> &Table<Self> {
        &state.seasons
    }

    fn table_mut(state: &mut CatalogState) -> &mut Table<Self> {
        &mut state.seasons
    }

    fn remove_children(state: &mut CatalogState, id: CatalogId) {
        state.episodes.remove_group(id);
    }

    fn duplicate_children(state: &mut CatalogState, source: CatalogId, copy: CatalogId) {
        for episode in state.episodes.group(Some(source)) {
            state.episodes.insert(Some(copy), episode);
        }
    }
}

impl Nested for Season {
    type Parent = Show;
}

/* --------------------------------------------------------------------------
Music
-------------------------------------------------------------------------- */

impl Stored for Music {
    fn table(state: &CatalogState) -> &Table<Self> {
        &state.music
    }

    fn table_mut(state: &mut CatalogState) -> &mut Table<Self> {
        &mut state.music
    }

    fn remove_children(state: &mut CatalogState, id: CatalogId) {
        state.songs.remove_group(id);
    }

    fn duplicate_children(state: &mut CatalogState, source: CatalogId, copy: CatalogId) {
        for song in state.songs.group(Some(source)) {
            state.songs.insert(Some(copy), song);
        }
    }
}

impl TopLevel for Music {
    fn clear(state: &mut CatalogState) {
        state.music.clear();
        state.songs.clear();
    }
}
