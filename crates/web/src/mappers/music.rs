use catalog_core::error::CoreError;
use catalog_facade::models::Music;

use super::parse_number;
use crate::forms::MusicFo;

pub fn map(source: &Music) -> MusicFo {
    MusicFo {
        id: source.id,
        name: source.name.clone(),
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        media_count: source.media_count.to_string(),
        note: source.note.clone(),
        position: source.position.into(),
    }
}

pub fn map_back(source: &MusicFo) -> Result<Music, CoreError> {
    Ok(Music {
        id: source.id,
        name: source.name.clone(),
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        media_count: parse_number("mediaCount", &source.media_count)?,
        note: source.note.clone(),
        position: source.position.value("position")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let music = Music {
            id: Some(1),
            name: "Album".to_string(),
            wiki_en: Some("en".to_string()),
            wiki_cz: None,
            media_count: 1,
            note: None,
            position: Some(0),
        };
        assert_eq!(map_back(&map(&music)).unwrap(), music);
    }

    #[test]
    fn blank_media_count_is_an_error() {
        let fo = MusicFo {
            name: "Album".to_string(),
            ..MusicFo::default()
        };
        assert!(map_back(&fo).is_err());
    }
}
