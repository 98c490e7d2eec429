use catalog_core::error::CoreError;
use catalog_facade::models::Episode;

use super::{parse_number, time};
use crate::forms::EpisodeFo;

pub fn map(source: &Episode) -> EpisodeFo {
    EpisodeFo {
        id: source.id,
        number: source.number.to_string(),
        name: source.name.clone(),
        length: time::map(source.length),
        note: source.note.clone(),
        position: source.position.into(),
    }
}

pub fn map_back(source: &EpisodeFo) -> Result<Episode, CoreError> {
    Ok(Episode {
        id: source.id,
        number: parse_number("number", &source.number)?,
        name: source.name.clone(),
        length: time::map_back(&source.length)?,
        note: source.note.clone(),
        position: source.position.value("position")?,
    })
}
