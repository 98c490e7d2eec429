//! Catalog entities as exchanged with the facade layer.
//!
//! New entities carry neither `id` nor `position`; the facade assigns both.

pub mod account;
pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod picture;
pub mod program;
pub mod show;

use catalog_core::types::CatalogId;

pub use account::Account;
pub use game::Game;
pub use genre::Genre;
pub use movie::{Medium, Movie};
pub use music::{Music, Song};
pub use picture::Picture;
pub use program::Program;
pub use show::{Episode, Season, Show};

/// Identity and ordering shared by every catalog entity.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Entity name used in events and log fields (e.g. `"Movie"`).
    const NAME: &'static str;

    fn id(&self) -> Option<CatalogId>;
    fn set_id(&mut self, id: Option<CatalogId>);
    fn position(&self) -> Option<i32>;
    fn set_position(&mut self, position: Option<i32>);
}

macro_rules! catalog_entity {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl CatalogEntity for $ty {
                const NAME: &'static str = $name;

                fn id(&self) -> Option<CatalogId> {
                    self.id
                }

                fn set_id(&mut self, id: Option<CatalogId>) {
                    self.id = id;
                }

                fn position(&self) -> Option<i32> {
                    self.position
                }

                fn set_position(&mut self, position: Option<i32>) {
                    self.position = position;
                }
            }
        )+
    };
}

catalog_entity! {
    Episode => "Episode",
    Game => "Game",
    Genre => "Genre",
    Movie => "Movie",
    Music => "Music",
    Picture => "Picture",
    Program => "Program",
    Season => "Season",
    Show => "Show",
    Song => "Song",
}
