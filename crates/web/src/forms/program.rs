use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{checked, empty_as_none, validation, FieldValue, FormLists};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgramFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::not_blank"))]
    pub name: String,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    #[validate(custom(function = "validation::media_count"))]
    pub media_count: String,
    #[serde(deserialize_with = "checked")]
    pub crack: bool,
    #[serde(deserialize_with = "checked")]
    pub serial_key: bool,
    pub other_data: Option<String>,
    pub note: Option<String>,
    #[validate(custom(function = "validation::well_formed"))]
    pub position: FieldValue<i32>,
}

impl FormLists for ProgramFo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_count_upper_bound() {
        let program = ProgramFo {
            name: "Editor".to_string(),
            media_count: "101".to_string(),
            ..ProgramFo::default()
        };
        assert!(program.validate().unwrap_err().field_errors().contains_key("media_count"));
    }
}
