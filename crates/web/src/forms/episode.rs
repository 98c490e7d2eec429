use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{empty_as_none, validation, FieldValue, FormLists, TimeFo};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeFo {
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<CatalogId>,
    #[validate(custom(function = "validation::episode_number"))]
    pub number: String,
    #[validate(custom(function = "validation::not_blank"))]
    pub name: String,
    #[validate(nested)]
    pub length: TimeFo,
    pub note: Option<String>,
    #[validate(custom(function = "validation::well_formed"))]
    pub position: FieldValue<i32>,
}

impl FormLists for EpisodeFo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_validated() {
        let episode = EpisodeFo {
            number: "3".to_string(),
            name: "Pilot".to_string(),
            ..EpisodeFo::default()
        };
        let errors = episode.validate().unwrap_err();
        assert!(errors.errors().contains_key("length"));
        assert!(!errors.errors().contains_key("name"));
    }

    #[test]
    fn number_range() {
        let episode = EpisodeFo {
            number: "501".to_string(),
            name: "Pilot".to_string(),
            length: TimeFo {
                hours: "0".to_string(),
                minutes: "42".to_string(),
                seconds: "0".to_string(),
            },
            ..EpisodeFo::default()
        };
        let errors = episode.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert!(errors.field_errors().contains_key("number"));
    }
}
