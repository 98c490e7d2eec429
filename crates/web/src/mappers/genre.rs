use catalog_core::error::CoreError;
use catalog_facade::models::Genre;

use crate::forms::GenreFo;

pub fn map(source: &Genre) -> GenreFo {
    GenreFo {
        id: source.id,
        name: source.name.clone(),
        position: source.position.into(),
    }
}

pub fn map_back(source: &GenreFo) -> Result<Genre, CoreError> {
    Ok(Genre {
        id: source.id,
        name: source.name.clone(),
        position: source.position.value("position")?,
    })
}
