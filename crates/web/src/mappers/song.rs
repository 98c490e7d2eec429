use catalog_core::error::CoreError;
use catalog_facade::models::Song;

use super::time;
use crate::forms::SongFo;

pub fn map(source: &Song) -> SongFo {
    SongFo {
        id: source.id,
        name: source.name.clone(),
        length: time::map(source.length),
        note: source.note.clone(),
        position: source.position.into(),
    }
}

pub fn map_back(source: &SongFo) -> Result<Song, CoreError> {
    Ok(Song {
        id: source.id,
        name: source.name.clone(),
        length: time::map_back(&source.length)?,
        note: source.note.clone(),
        position: source.position.value("position")?,
    })
}
