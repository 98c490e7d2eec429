//! Field and form level validators used by the form objects.
//!
//! Field validators take the raw text a browser submitted, so blank and
//! malformed numbers are reported as ordinary validation errors.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use catalog_core::{imdb, year};
use validator::ValidationError;

use super::FieldValue;

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn number_in(text: &str, range: RangeInclusive<i32>, code: &'static str) -> Result<(), ValidationError> {
    match text.trim().parse::<i32>() {
        Ok(value) if range.contains(&value) => Ok(()),
        _ => Err(invalid(
            code,
            format!("must be a number between {} and {}", range.start(), range.end()),
        )),
    }
}

/* --------------------------------------------------------------------------
Field validators
-------------------------------------------------------------------------- */

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("not_blank", "must not be blank"));
    }
    Ok(())
}

pub fn year(value: &str) -> Result<(), ValidationError> {
    year::validate_year(value).map_err(|_| {
        invalid(
            "date_range",
            format!(
                "must be a year between {} and {}",
                year::MIN_YEAR,
                year::current_year()
            ),
        )
    })
}

pub fn imdb_code(value: &str) -> Result<(), ValidationError> {
    imdb::validate_imdb_code(value).map_err(|_| {
        invalid(
            "imdb_code",
            format!("must be a number between 1 and {}", imdb::MAX_IMDB_CODE),
        )
    })
}

pub fn hours(value: &str) -> Result<(), ValidationError> {
    number_in(value, 0..=23, "range")
}

pub fn minutes(value: &str) -> Result<(), ValidationError> {
    number_in(value, 0..=59, "range")
}

pub fn seconds(value: &str) -> Result<(), ValidationError> {
    number_in(value, 0..=59, "range")
}

pub fn media_count(value: &str) -> Result<(), ValidationError> {
    number_in(value, 1..=100, "range")
}

pub fn season_number(value: &str) -> Result<(), ValidationError> {
    number_in(value, 1..=100, "range")
}

pub fn episode_number(value: &str) -> Result<(), ValidationError> {
    number_in(value, 1..=500, "range")
}

/// A choice that must be made, from the offered values.
pub fn selected<T>(value: &FieldValue<T>) -> Result<(), ValidationError> {
    match value {
        FieldValue::Parsed(_) => Ok(()),
        FieldValue::Blank => Err(invalid("required", "must be selected")),
        FieldValue::Malformed(_) => Err(invalid("choice", "is not a valid choice")),
    }
}

pub fn well_formed<T>(value: &FieldValue<T>) -> Result<(), ValidationError> {
    if value.is_malformed() {
        return Err(invalid("type_mismatch", "has an invalid value"));
    }
    Ok(())
}

pub fn all_well_formed<T>(values: &[FieldValue<T>]) -> Result<(), ValidationError> {
    if values.iter().any(FieldValue::is_malformed) {
        return Err(invalid("type_mismatch", "contains an invalid value"));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Form validators
-------------------------------------------------------------------------- */

/// A checked "has IMDB entry" flag requires a code.
pub fn imdb_flag(imdb: bool, imdb_code: Option<&str>) -> Result<(), ValidationError> {
    if imdb && imdb_code.map_or(true, |code| code.trim().is_empty()) {
        return Err(invalid("imdb", "IMDB code must be filled in"));
    }
    Ok(())
}

/// A length must be positive once all three parts are numbers.
pub fn positive_length(hours: &str, minutes: &str, seconds: &str) -> Result<(), ValidationError> {
    let parts = [hours, minutes, seconds].map(|part| part.trim().parse::<i32>());
    match parts {
        [Ok(h), Ok(m), Ok(s)] if h + m + s <= 0 => {
            Err(invalid("time", "length must be greater than zero"))
        }
        _ => Ok(()),
    }
}

pub fn years_in_order(start: &str, end: &str) -> Result<(), ValidationError> {
    year::validate_years(start, end)
        .map_err(|_| invalid("years", "starting year must not be after ending year"))
}
