use catalog_core::error::CoreError;
use catalog_facade::models::{Medium, Movie};

use super::{imdb_code_back, imdb_fields, parse_number, require_language, time};
use crate::forms::{FieldValue, MovieFo};

pub fn map(source: &Movie) -> MovieFo {
    let (imdb, imdb_code) = imdb_fields(source.imdb_code);
    MovieFo {
        id: source.id,
        czech_name: source.czech_name.clone(),
        original_name: source.original_name.clone(),
        year: source.year.to_string(),
        language: FieldValue::Parsed(source.language),
        subtitles: source.subtitles.iter().copied().map(FieldValue::Parsed).collect(),
        media: source.media.iter().map(|medium| time::map(medium.length)).collect(),
        csfd: source.csfd.clone(),
        imdb,
        imdb_code,
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        picture: source.picture.into(),
        note: source.note.clone(),
        position: source.position.into(),
        genres: source
            .genres
            .iter()
            .filter_map(|genre| genre.id)
            .map(FieldValue::Parsed)
            .collect(),
    }
}

/// Map a submitted form back to a movie. Genres are left empty; the caller
/// resolves the submitted ids.
pub fn map_back(source: &MovieFo) -> Result<Movie, CoreError> {
    let media = source
        .media
        .iter()
        .enumerate()
        .map(|(index, medium)| {
            Ok(Medium {
                id: None,
                number: index as i32 + 1,
                length: time::map_back(medium)?,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(Movie {
        id: source.id,
        czech_name: source.czech_name.clone(),
        original_name: source.original_name.clone(),
        year: parse_number("year", &source.year)?,
        language: require_language(&source.language)?,
        subtitles: FieldValue::values(&source.subtitles, "subtitles")?,
        media,
        csfd: source.csfd.clone(),
        imdb_code: imdb_code_back(source.imdb, source.imdb_code.as_deref())?,
        wiki_en: source.wiki_en.clone(),
        wiki_cz: source.wiki_cz.clone(),
        picture: source.picture.value("picture")?,
        note: source.note.clone(),
        position: source.position.value("position")?,
        genres: Vec::new(),
    })
}
