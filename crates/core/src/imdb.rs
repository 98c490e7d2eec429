//! IMDB code rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Largest IMDB code (seven digits).
pub const MAX_IMDB_CODE: i32 = 9_999_999;

/// Stored in place of an IMDB code when an entry has none.
pub const NO_IMDB_CODE: i32 = -1;

static IMDB_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,7}$").expect("valid regex"));

/// Validate the text of an IMDB code field.
///
/// An empty code is valid; the "has IMDB entry" flag decides whether one is
/// required.
pub fn validate_imdb_code(text: &str) -> Result<(), CoreError> {
    if text.is_empty() {
        return Ok(());
    }
    if !IMDB_CODE_PATTERN.is_match(text) {
        return Err(CoreError::Validation(format!(
            "IMDB code must have 1 to 7 digits (got '{text}')"
        )));
    }
    match text.parse::<i32>() {
        Ok(code) if (1..=MAX_IMDB_CODE).contains(&code) => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "IMDB code must be between 1 and {MAX_IMDB_CODE}"
        ))),
    }
}

/// Whether a stored code refers to an IMDB entry.
pub fn has_imdb_code(code: i32) -> bool {
    code >= 1
}
