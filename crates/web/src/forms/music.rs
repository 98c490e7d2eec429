use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{empty_as_none, validation, FieldValue, FormLists};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct MusicFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::not_blank"))]
    pub name: String,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    #[validate(custom(function = "validation::media_count"))]
    pub media_count: String,
    pub note: Option<String>,
    #[validate(custom(function = "validation::well_formed"))]
    pub position: FieldValue<i32>,
}

impl FormLists for MusicFo {}
