use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{checked, empty_as_none, validation, FieldValue, FormLists};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "imdb_filled_in"))]
pub struct ShowFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::not_blank"))]
    pub czech_name: String,
    #[validate(custom(function = "validation::not_blank"))]
    pub original_name: String,
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

impl FormLists for ShowFo {
    const LISTS: &'static [&'static str] = &["genres"];
}

fn imdb_filled_in(show: &ShowFo) -> Result<(), ValidationError> {
    validation::imdb_flag(show.imdb, show.imdb_code.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_genres_required() {
        let errors = ShowFo::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("czech_name"));
        assert!(fields.contains_key("original_name"));
        assert!(fields.contains_key("genres"));
    }

    #[test]
    fn imdb_code_is_checked() {
        let mut show = ShowFo {
            czech_name: "Přátelé".to_string(),
            original_name: "Friends".to_string(),
            genres: vec![FieldValue::Parsed(2)],
            ..ShowFo::default()
        };
        assert!(show.validate().is_ok());

        show.imdb = true;
        show.imdb_code = Some("0".to_string());
        assert!(show.validate().unwrap_err().field_errors().contains_key("imdb_code"));
    }
}
