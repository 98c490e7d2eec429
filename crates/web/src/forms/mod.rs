//! Form objects bound from `application/x-www-form-urlencoded` bodies.
//!
//! Every numeric field is kept as the submitted text so invalid input can be
//! re-rendered unchanged next to its error. [`BoundForm`] deserializes a form
//! object, validates it and works out which submit button was pressed.

pub mod episode;
pub mod field;
pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod program;
pub mod season;
pub mod show;
pub mod song;
pub mod time;
pub mod validation;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::AppError;

pub use episode::EpisodeFo;
pub use field::FieldValue;
pub use game::GameFo;
pub use genre::GenreFo;
pub use movie::MovieFo;
pub use music::MusicFo;
pub use program::ProgramFo;
pub use season::SeasonFo;
pub use show::ShowFo;
pub use song::SongFo;
pub use time::TimeFo;

/// Nesting depth accepted for bracketed keys (`media[0][hours]`).
const MAX_FORM_DEPTH: usize = 5;

/// Prefix of the per-medium remove buttons (`removeMedium0`, `removeMedium1`, ...).
const REMOVE_MEDIUM_PREFIX: &str = "removeMedium";

/// Key under which form level errors are reported.
const FORM_ERRORS_KEY: &str = "form";

/* --------------------------------------------------------------------------
Submit actions
-------------------------------------------------------------------------- */

/// The submit button a form was posted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    Update,
    Cancel,
    AddMedium,
    RemoveMedium(usize),
    ChoosePicture,
    RemovePicture,
    /// No known button was pressed.
    None,
}

impl FormAction {
    /// Resolve the action from the submitted keys.
    ///
    /// Saving wins over editing actions, which win over cancel.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let keys: BTreeSet<&str> = keys.into_iter().collect();

        let simple = [
            ("create", FormAction::Create),
            ("update", FormAction::Update),
            ("addMedium", FormAction::AddMedium),
            ("choosePicture", FormAction::ChoosePicture),
            ("removePicture", FormAction::RemovePicture),
        ];
        if let Some((_, action)) = simple.iter().find(|(key, _)| keys.contains(key)) {
            return *action;
        }

        let removed = keys.iter().find_map(|key| {
            key.strip_prefix(REMOVE_MEDIUM_PREFIX)
                .and_then(|index| index.parse().ok())
        });
        if let Some(index) = removed {
            return FormAction::RemoveMedium(index);
        }

        if keys.contains("cancel") {
            FormAction::Cancel
        } else {
            FormAction::None
        }
    }
}

/* --------------------------------------------------------------------------
Validation errors
-------------------------------------------------------------------------- */

/// Validation messages keyed by field path (`czechName`, `media[1].hours`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    fn collect(&mut self, prefix: &str, errors: &ValidationErrors) {
        for (field, kind) in errors.errors() {
            let field = if *field == "__all__" {
                FORM_ERRORS_KEY.to_string()
            } else {
                to_camel_case(field)
            };
            let path = if prefix.is_empty() {
                field
            } else {
                format!("{prefix}.{field}")
            };

            match kind {
                ValidationErrorsKind::Field(list) => {
                    let messages = self.0.entry(path).or_default();
                    messages.extend(list.iter().map(|error| {
                        error
                            .message
                            .as_ref()
                            .map_or_else(|| error.code.to_string(), ToString::to_string)
                    }));
                }
                ValidationErrorsKind::Struct(nested) => self.collect(&path, nested),
                ValidationErrorsKind::List(items) => {
                    for (index, nested) in items {
                        self.collect(&format!("{path}[{index}]"), nested);
                    }
                }
            }
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut collected = FieldErrors::default();
        collected.collect("", errors);
        collected
    }
}

fn to_camel_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            result.extend(c.to_uppercase());
            upper = false;
        } else {
            result.push(c);
        }
    }
    result
}

/* --------------------------------------------------------------------------
Extractor
-------------------------------------------------------------------------- */

/// Form objects naming the list fields that browsers post as repeated keys.
///
/// A multi-select or a checkbox group sends `genres=1&genres=2`; those keys
/// are numbered (`genres[0]`, `genres[1]`) before the form is bound.
pub trait FormLists {
    const LISTS: &'static [&'static str] = &[];
}

/// Number repeated flat keys of list fields. Keys that already carry
/// brackets pass through unchanged.
fn index_list_keys(pairs: &[(String, String)], lists: &[&str]) -> Vec<(String, String)> {
    let mut counters: BTreeMap<&str, usize> = BTreeMap::new();
    pairs
        .iter()
        .map(|(key, value)| match lists.iter().find(|list| **list == key.as_str()) {
            Some(list) => {
                let index = counters.entry(*list).or_default();
                let indexed = format!("{key}[{index}]");
                *index += 1;
                (indexed, value.clone())
            }
            None => (key.clone(), value.clone()),
        })
        .collect()
}

/// A validated form object together with the pressed submit button.
///
/// Validation failures do not reject the request; handlers decide whether
/// the errors matter for the chosen action.
#[derive(Debug)]
pub struct BoundForm<T> {
    pub form: T,
    pub action: FormAction,
    pub errors: FieldErrors,
}

impl<T, S> FromRequest<S> for BoundForm<T>
where
    T: DeserializeOwned + Validate + FormLists,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))?;
        let action = FormAction::from_keys(pairs.iter().map(|(key, _)| key.as_str()));

        let indexed = serde_urlencoded::to_string(index_list_keys(&pairs, T::LISTS))
            .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))?;
        let form: T = serde_qs::Config::new(MAX_FORM_DEPTH, false)
            .deserialize_str(&indexed)
            .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))?;

        let errors = match form.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(&errors),
        };

        Ok(Self {
            form,
            action,
            errors,
        })
    }
}

/// Deserialize an optional value, treating an empty or blank string as absent.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Deserialize a checkbox. Browsers send `on` for a ticked box and omit it
/// otherwise.
pub fn checked<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(!matches!(raw.trim(), "" | "false" | "off"))
}
