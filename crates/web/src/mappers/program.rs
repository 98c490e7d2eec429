use catalog_core::error::CoreError;
use catalog_facade::models::Program;

use super::parse_number;
use crate::forms::ProgramFo;

pub fn map(source: &Program) -> ProgramFo {
    ProgramFo {
        id: source.id,
        name: source.name.clone(),
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        media_count: source.media_count.to_string(),
        crack: source.crack,
        serial_key: source.serial_key,
        other_data: source.other_data.clone(),
        note: source.note.clone(),
        position: source.position.into(),
    }
}

pub fn map_back(source: &ProgramFo) -> Result<Program, CoreError> {
    Ok(Program {
        id: source.id,
        name: source.name.clone(),
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        media_count: parse_number("mediaCount", &source.media_count)?,
        crack: source.crack,
        serial_key: source.serial_key,
        other_data: source.other_data.clone(),
        note: source.note.clone(),
        position: source.position.value("position")?,
    })
}
