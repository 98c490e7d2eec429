use catalog_core::types::{CatalogId, Seconds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Music {
    pub id: Option<CatalogId>,
    pub name: String,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: i32,
    pub note: Option<String>,
    pub position: Option<i32>,
}

/// A song on a [`Music`] album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: Option<CatalogId>,
    pub name: String,
    pub length: Seconds,
    pub note: Option<String>,
    pub position: Option<i32>,
}
