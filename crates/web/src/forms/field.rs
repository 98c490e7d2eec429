use std::str::FromStr;

use catalog_core::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A form value parsed from submitted text.
///
/// Text that does not parse is kept as submitted, so the form is shown
/// again with a field error instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<T> {
    Blank,
    Parsed(T),
    Malformed(String),
}

impl<T> Default for FieldValue<T> {
    fn default() -> Self {
        FieldValue::Blank
    }
}

impl<T> From<Option<T>> for FieldValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Blank, FieldValue::Parsed)
    }
}

impl<T> FieldValue<T> {
    pub fn is_malformed(&self) -> bool {
        matches!(self, FieldValue::Malformed(_))
    }
}

impl<T: Clone> FieldValue<T> {
    /// The parsed value, or `None` when nothing was submitted.
    pub fn value(&self, field: &str) -> Result<Option<T>, CoreError> {
        match self {
            FieldValue::Blank => Ok(None),
            FieldValue::Parsed(value) => Ok(Some(value.clone())),
            FieldValue::Malformed(text) => Err(CoreError::Validation(format!(
                "{field} has an invalid value: {text:?}"
            ))),
        }
    }

    /// Parsed values of a list field. Blank entries are skipped.
    pub fn values(values: &[FieldValue<T>], field: &str) -> Result<Vec<T>, CoreError> {
        values
            .iter()
            .filter_map(|value| value.value(field).transpose())
            .collect()
    }
}

impl<T: Serialize> Serialize for FieldValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Blank => serializer.serialize_none(),
            FieldValue::Parsed(value) => value.serialize(serializer),
            FieldValue::Malformed(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de, T: FromStr> Deserialize<'de> for FieldValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(text) = raw else {
            return Ok(FieldValue::Blank);
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(FieldValue::Blank);
        }
        Ok(match trimmed.parse() {
            Ok(value) => FieldValue::Parsed(value),
            Err(_) => FieldValue::Malformed(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use catalog_core::language::Language;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        language: FieldValue<Language>,
        picture: FieldValue<i32>,
    }

    fn bind(body: &str) -> Sample {
        serde_qs::Config::new(5, false).deserialize_str(body).unwrap()
    }

    #[test]
    fn parses_or_keeps_text() {
        let sample = bind("language=EN&picture=x7");
        assert_eq!(sample.language, FieldValue::Parsed(Language::En));
        assert_eq!(sample.picture, FieldValue::Malformed("x7".to_string()));
    }

    #[test]
    fn blank_and_missing_values() {
        let sample = bind("language=");
        assert_eq!(sample.language, FieldValue::Blank);
        assert_eq!(sample.picture, FieldValue::Blank);
    }

    #[test]
    fn malformed_value_is_a_mapping_error() {
        assert_eq!(FieldValue::Parsed(3).value("picture").unwrap(), Some(3));
        assert_matches!(
            FieldValue::<i32>::Malformed("x".into()).value("picture"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn list_values_skip_blanks() {
        let values = [FieldValue::Parsed(1), FieldValue::Blank, FieldValue::Parsed(4)];
        assert_eq!(FieldValue::values(&values, "genres").unwrap(), [1, 4]);
    }

    #[test]
    fn renders_submitted_text() {
        let value: FieldValue<i32> = FieldValue::Malformed("abc".into());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"abc\"");
        assert_eq!(serde_json::to_string(&FieldValue::<i32>::Blank).unwrap(), "null");
    }
}
