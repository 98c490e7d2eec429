use catalog_core::error::CoreError;
use catalog_facade::models::Season;

use super::{parse_number, require_language};
use crate::forms::{FieldValue, SeasonFo};

pub fn map(source: &Season) -> SeasonFo {
    SeasonFo {
        id: source.id,
        number: source.number.to_string(),
        start_year: source.start_year.to_string(),
        end_year: source.end_year.to_string(),
        language: FieldValue::Parsed(source.language),
        subtitles: source.subtitles.iter().copied().map(FieldValue::Parsed).collect(),
        note: source.note.clone(),
        position: source.position.into(),
    }
}

pub fn map_back(source: &SeasonFo) -> Result<Season, CoreError> {
    Ok(Season {
        id: source.id,
        number: parse_number("number", &source.number)?,
        start_year: parse_number("startYear", &source.start_year)?,
        end_year: parse_number("endYear", &source.end_year)?,
        language: require_language(&source.language)?,
        subtitles: FieldValue::values(&source.subtitles, "subtitles")?,
        note: source.note.clone(),
        position: source.position.value("position")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::language::Language;

    #[test]
    fn round_trip() {
        let season = Season {
            id: Some(3),
            number: 2,
            start_year: 2001,
            end_year: 2002,
            language: Language::En,
            subtitles: vec![Language::Cz, Language::En],
            note: None,
            position: Some(1),
        };
        let fo = map(&season);
        assert_eq!(fo.start_year, "2001");
        assert_eq!(map_back(&fo).unwrap(), season);
    }

    #[test]
    fn missing_language_is_an_error() {
        let fo = SeasonFo {
            number: "1".to_string(),
            start_year: "2000".to_string(),
            end_year: "2000".to_string(),
            ..SeasonFo::default()
        };
        assert!(map_back(&fo).is_err());
    }
}
