//! Transcription between catalog entities and form objects.
//!
//! `map` never fails. `map_back` parses the submitted text again, so it
//! reports malformed numbers as [`CoreError::Validation`] instead of
//! trusting that validation ran first.

pub mod episode;
pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod program;
pub mod season;
pub mod show;
pub mod song;
pub mod time;

use catalog_core::error::CoreError;
use catalog_core::imdb::{self, NO_IMDB_CODE};
use catalog_core::language::Language;

use crate::forms::FieldValue;

fn parse_number(field: &str, text: &str) -> Result<i32, CoreError> {
    text.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("{field} is not a number: {text:?}")))
}

fn require_language(language: &FieldValue<Language>) -> Result<Language, CoreError> {
    language
        .value("language")?
        .ok_or_else(|| CoreError::Validation("language is required".to_string()))
}

/// `(imdb, imdbCode)` form fields for a stored code.
fn imdb_fields(imdb_code: i32) -> (bool, Option<String>) {
    if imdb::has_imdb_code(imdb_code) {
        (true, Some(imdb_code.to_string()))
    } else {
        (false, None)
    }
}

fn imdb_code_back(imdb: bool, imdb_code: Option<&str>) -> Result<i32, CoreError> {
    match (imdb, imdb_code) {
        (true, Some(code)) => parse_number("imdbCode", code),
        (true, None) => Err(CoreError::Validation("imdbCode is required".to_string())),
        (false, _) => Ok(NO_IMDB_CODE),
    }
}
