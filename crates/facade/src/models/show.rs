use catalog_core::language::Language;
use catalog_core::types::{CatalogId, Seconds};
use serde::{Deserialize, Serialize};

use super::genre::Genre;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: Option<CatalogId>,
    pub czech_name: String,
    pub original_name: String,
    pub csfd: Option<String>,
    /// `-1` when the show has no IMDB entry.
    pub imdb_code: i32,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<CatalogId>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Vec<Genre>,
}

/// A season of a [`Show`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: Option<CatalogId>,
    pub number: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub language: Language,
    pub subtitles: Vec<Language>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

/// An episode of a [`Season`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: Option<CatalogId>,
    pub number: i32,
    pub name: String,
    pub length: Seconds,
    pub note: Option<String>,
    pub position: Option<i32>,
}
