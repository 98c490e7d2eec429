use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{empty_as_none, validation, FieldValue, FormLists};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct GenreFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::not_blank"))]
    pub name: String,
    #[validate(custom(function = "validation::well_formed"))]
    pub position: FieldValue<i32>,
}

impl FormLists for GenreFo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let errors = GenreFo::default().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let genre = GenreFo {
            name: "Drama".to_string(),
            ..GenreFo::default()
        };
        assert!(genre.validate().is_ok());
    }
}
