use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{empty_as_none, validation, FieldValue, FormLists, TimeFo};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SongFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::not_blank"))]
    pub name: String,
    #[validate(nested)]
    pub length: TimeFo,
    pub note: Option<String>,
    #[validate(custom(function = "validation::well_formed"))]
    pub position: FieldValue<i32>,
}

impl FormLists for SongFo {}
