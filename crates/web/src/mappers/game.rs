use catalog_core::error::CoreError;
use catalog_facade::models::Game;

use super::parse_number;
use crate::forms::GameFo;

pub fn map(source: &Game) -> GameFo {
    GameFo {
        id: source.id,
        name: source.name.clone(),
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        media_count: source.media_count.to_string(),
        crack: source.crack,
        serial_key: source.serial_key,
        patch: source.patch,
        trainer: source.trainer,
        trainer_data: source.trainer_data,
        editor: source.editor,
        saves: source.saves,
        other_data: source.other_data.clone(),
        note: source.note.clone(),
        position: source.position.into(),
    }
}

pub fn map_back(source: &GameFo) -> Result<Game, CoreError> {
    Ok(Game {
        id: source.id,
        name: source.name.clone(),
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        media_count: parse_number("mediaCount", &source.media_count)?,
        crack: source.crack,
        serial_key: source.serial_key,
        patch: source.patch,
        trainer: source.trainer,
        trainer_data: source.trainer_data,
        editor: source.editor,
        saves: source.saves,
        other_data: source.other_data.clone(),
        note: source.note.clone(),
        position: source.position.value("position")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let game = Game {
            id: Some(8),
            name: "Portal".to_string(),
            wiki_en: None,
            wiki_cz: None,
            media_count: 2,
            crack: true,
            serial_key: false,
            patch: true,
            trainer: false,
            trainer_data: false,
            editor: true,
            saves: false,
            other_data: Some("manual".to_string()),
            note: None,
            position: Some(3),
        };
        let fo = map(&game);
        assert_eq!(fo.media_count, "2");
        assert_eq!(map_back(&fo).unwrap(), game);
    }
}
