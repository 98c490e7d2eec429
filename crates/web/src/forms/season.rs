use catalog_core::language::Language;
use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{empty_as_none, validation, FieldValue, FormLists};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "years_in_order"))]
pub struct SeasonFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::season_number"))]
    pub number: String,
    #[validate(custom(function = "validation::year"))]
    pub start_year: String,
    #[validate(custom(function = "validation::year"))]
    pub end_year: String,
    #[validate(custom(function = "validation::selected"))]
    pub language: FieldValue<Language>,
    #[validate(custom(function = "validation::all_well_formed"))]
    pub subtitles: Vec<FieldValue<Language>>,
    pub note: Option<String>,
    #[validate(custom(function = "validation::well_formed"))]
    pub position: FieldValue<i32>,
}

impl FormLists for SeasonFo {
    const LISTS: &'static [&'static str] = &["subtitles"];
}

fn years_in_order(season: &SeasonFo) -> Result<(), ValidationError> {
    validation::years_in_order(&season.start_year, &season.end_year)
}
