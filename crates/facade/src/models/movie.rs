use catalog_core::language::Language;
use catalog_core::types::{CatalogId, Seconds};
use serde::{Deserialize, Serialize};

use super::genre::Genre;

/// One physical medium (disc) of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medium {
    pub id: Option<CatalogId>,
    /// 1-based order within the movie.
    pub number: i32,
    pub length: Seconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Option<CatalogId>,
    pub czech_name: String,
    pub original_name: String,
    pub year: i32,
    pub language: Language,
    pub subtitles: Vec<Language>,
    pub media: Vec<Medium>,
    pub csfd: Option<String>,
    /// `-1` when the movie has no IMDB entry.
    pub imdb_code: i32,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    /// Id of the cover picture.
    pub picture: Option<CatalogId>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Vec<Genre>,
}
