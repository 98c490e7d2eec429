//! Year bounds for movies and seasons.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Earliest year accepted for a movie or season.
pub const MIN_YEAR: i32 = 1930;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

/// The current calendar year (UTC).
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Parse a four digit year within `MIN_YEAR..=current_year()`.
pub fn parse_year(text: &str) -> Result<i32, CoreError> {
    if !YEAR_PATTERN.is_match(text) {
        return Err(CoreError::Validation(format!(
            "Year must have four digits (got '{text}')"
        )));
    }
    let year: i32 = text
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid year: '{text}'")))?;
    let max = current_year();
    if !(MIN_YEAR..=max).contains(&year) {
        return Err(CoreError::Validation(format!(
            "Year must be between {MIN_YEAR} and {max} (got {year})"
        )));
    }
    Ok(year)
}

/// Validate the text of a year field.
pub fn validate_year(text: &str) -> Result<(), CoreError> {
    parse_year(text).map(|_| ())
}

/// Validate that a start year does not come after an end year.
///
/// Either year being invalid on its own is left to [`validate_year`], so
/// this only fails when both parse and are out of order.
pub fn validate_years(start: &str, end: &str) -> Result<(), CoreError> {
    match (parse_year(start), parse_year(end)) {
        (Ok(start), Ok(end)) if start > end => Err(CoreError::Validation(format!(
            "Starting year {start} must not be after ending year {end}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_bounds() {
        assert_eq!(parse_year("1930").unwrap(), MIN_YEAR);
        assert_eq!(parse_year(&current_year().to_string()).unwrap(), current_year());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_matches!(parse_year("1929"), Err(CoreError::Validation(_)));
        let next = (current_year() + 1).to_string();
        assert_matches!(parse_year(&next), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_four_digit_text() {
        assert_matches!(validate_year(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_year("200"), Err(CoreError::Validation(_)));
        assert_matches!(validate_year("20001"), Err(CoreError::Validation(_)));
        assert_matches!(validate_year("2k00"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn years_in_order() {
        assert!(validate_years("2000", "2002").is_ok());
        assert!(validate_years("2000", "2000").is_ok());
        assert_matches!(validate_years("2002", "2000"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn years_order_ignores_invalid_years() {
        assert!(validate_years("abcd", "2000").is_ok());
        assert!(validate_years("2000", "1800").is_ok());
    }
}
