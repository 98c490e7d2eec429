use catalog_core::error::CoreError;
use catalog_facade::models::Show;

use super::{imdb_code_back, imdb_fields};
use crate::forms::{FieldValue, ShowFo};

pub fn map(source: &Show) -> ShowFo {
    let (imdb, imdb_code) = imdb_fields(source.imdb_code);
    ShowFo {
        id: source.id,
        czech_name: source.czech_name.clone(),
        original_name: source.original_name.clone(),
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

pub fn map_back(source: &ShowFo) -> Result<Show, CoreError> {
    Ok(Show {
        id: source.id,
        czech_name: source.czech_name.clone(),
        original_name: source.original_name.clone(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn show(imdb_code: i32) -> Show {
        Show {
            id: Some(2),
            czech_name: "Přátelé".to_string(),
            original_name: "Friends".to_string(),
            csfd: None,
            imdb_code,
            wiki_en: Some("wiki".to_string()),
            wiki_cz: None,
            picture: None,
            note: Some("note".to_string()),
            position: Some(1),
            genres: Vec::new(),
        }
    }

    #[test]
    fn show_without_imdb() {
        let fo = map(&show(-1));
        assert!(!fo.imdb);
        assert_eq!(fo.imdb_code, None);
        assert_eq!(map_back(&fo).unwrap().imdb_code, -1);
    }

    #[test]
    fn round_trip() {
        let show = show(108778);
        assert_eq!(map_back(&map(&show)).unwrap(), show);
    }

    #[test]
    fn malformed_picture_is_an_error() {
        let mut fo = map(&show(-1));
        fo.picture = FieldValue::Malformed("cover".to_string());
        assert_matches!(map_back(&fo), Err(CoreError::Validation(_)));
    }
}
