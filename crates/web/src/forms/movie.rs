use catalog_core::language::Language;
use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{checked, empty_as_none, validation, FieldValue, FormLists, TimeFo};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "imdb_filled_in"))]
pub struct MovieFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::not_blank"))]
    pub czech_name: String,
    #[validate(custom(function = "validation::not_blank"))]
    pub original_name: String,
    #[validate(custom(function = "validation::year"))]
    pub year: String,
    #[validate(custom(function = "validation::selected"))]
    pub language: FieldValue<Language>,
    #[validate(custom(function = "validation::all_well_formed"))]
    pub subtitles: Vec<FieldValue<Language>>,
    #[validate(length(min = 1, message = "at least one medium is required"), nested)]
    pub media: Vec<TimeFo>,
    pub csfd: Option<String>,
    #[serde(deserialize_with = "checked")]
    pub imdb: bool,
    #[validate(custom(function = "validation::imdb_code"))]
    pub imdb_code: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    #[validate(custom(function = "validation::well_formed"))]
    pub picture: FieldValue<CatalogId>,
    pub note: Option<String>,
    #[validate(custom(function = "validation::well_formed"))]
    pub position: FieldValue<i32>,
    #[validate(
        length(min = 1, message = "at least one genre is required"),
        custom(function = "validation::all_well_formed")
    )]
    pub genres: Vec<FieldValue<CatalogId>>,
}

impl FormLists for MovieFo {
    const LISTS: &'static [&'static str] = &["subtitles", "genres"];
}

impl MovieFo {
    /// Blank form for a new movie, with one medium to fill in.
    pub fn blank() -> Self {
        Self {
            media: vec![TimeFo::default()],
            ..Self::default()
        }
    }
}

fn imdb_filled_in(movie: &MovieFo) -> Result<(), ValidationError> {
    validation::imdb_flag(movie.imdb, movie.imdb_code.as_deref())
}
