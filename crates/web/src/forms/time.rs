use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::validation;

/// A length entered as hours, minutes and seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "positive_time"))]
pub struct TimeFo {
    #[validate(custom(function = "validation::hours"))]
    pub hours: String,
    #[validate(custom(function = "validation::minutes"))]
    pub minutes: String,
    #[validate(custom(function = "validation::seconds"))]
    pub seconds: String,
}

fn positive_time(time: &TimeFo) -> Result<(), ValidationError> {
    validation::positive_length(&time.hours, &time.minutes, &time.seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hours: &str, minutes: &str, seconds: &str) -> TimeFo {
        TimeFo {
            hours: hours.to_string(),
            minutes: minutes.to_string(),
            seconds: seconds.to_string(),
        }
    }

    #[test]
    fn valid_time() {
        assert!(time("1", "30", "0").validate().is_ok());
    }

    #[test]
    fn parts_out_of_range() {
        let errors = time("24", "60", "-1").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("hours"));
        assert!(fields.contains_key("minutes"));
        assert!(fields.contains_key("seconds"));
    }

    #[test]
    fn blank_parts_are_invalid() {
        let errors = TimeFo::default().validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn zero_length_is_invalid() {
        let errors = time("0", "0", "0").validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }
}
