//! Durations stored as whole seconds and rendered as `H:MM:SS`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Seconds;

const SECONDS_PER_MINUTE: i32 = 60;
const SECONDS_PER_HOUR: i32 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i32 = 24 * SECONDS_PER_HOUR;

/// A non-negative length of time.
///
/// Hours are reported as hours of the day, so a length of 25 hours has
/// `days() == 1` and `hours() == 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(Seconds);

impl Time {
    pub fn new(length: Seconds) -> Self {
        Self(length.max(0))
    }

    /// Build a length from hour, minute and second parts.
    ///
    /// Fails when the total does not fit in [`Seconds`].
    pub fn from_parts(hours: i32, minutes: i32, seconds: i32) -> Result<Self, CoreError> {
        hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|total| total.checked_add(minutes.checked_mul(SECONDS_PER_MINUTE)?))
            .and_then(|total| total.checked_add(seconds))
            .map(Self::new)
            .ok_or_else(|| CoreError::Validation("Length is out of range".to_string()))
    }

    /// Total length in seconds.
    pub fn length(self) -> Seconds {
        self.0
    }

    pub fn days(self) -> i32 {
        self.0 / SECONDS_PER_DAY
    }

    pub fn hours(self) -> i32 {
        self.0 % SECONDS_PER_DAY / SECONDS_PER_HOUR
    }

    pub fn minutes(self) -> i32 {
        self.0 % SECONDS_PER_HOUR / SECONDS_PER_MINUTE
    }

    pub fn seconds(self) -> i32 {
        self.0 % SECONDS_PER_MINUTE
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days() > 0 {
            write!(
                f,
                "{}:{:02}:{:02}:{:02}",
                self.days(),
                self.hours(),
                self.minutes(),
                self.seconds()
            )
        } else {
            write!(
                f,
                "{}:{:02}:{:02}",
                self.hours(),
                self.minutes(),
                self.seconds()
            )
        }
    }
}

impl std::iter::Sum for Time {
    fn sum<I: Iterator<Item = Time>>(iter: I) -> Self {
        Time::new(iter.map(Time::length).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn splits_length_into_parts() {
        let time = Time::new(2 * SECONDS_PER_DAY + 3 * SECONDS_PER_HOUR + 4 * 60 + 5);
        assert_eq!(time.days(), 2);
        assert_eq!(time.hours(), 3);
        assert_eq!(time.minutes(), 4);
        assert_eq!(time.seconds(), 5);
    }

    #[test]
    fn renders_without_days() {
        assert_eq!(Time::new(0).to_string(), "0:00:00");
        assert_eq!(Time::new(5400).to_string(), "1:30:00");
        assert_eq!(Time::from_parts(2, 5, 9).unwrap().to_string(), "2:05:09");
    }

    #[test]
    fn renders_days_when_longer_than_a_day() {
        assert_eq!(Time::new(SECONDS_PER_DAY + 61).to_string(), "1:00:01:01");
    }

    #[test]
    fn from_parts_matches_length() {
        assert_eq!(Time::from_parts(1, 2, 3).unwrap().length(), 3723);
    }

    #[test]
    fn from_parts_rejects_overflow() {
        assert_matches!(Time::from_parts(i32::MAX, 0, 0), Err(CoreError::Validation(_)));
        assert_matches!(Time::from_parts(0, i32::MAX, 0), Err(CoreError::Validation(_)));
        assert_matches!(Time::from_parts(596_523, 14, 8), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_lengths_clamp_to_zero() {
        assert_eq!(Time::new(-10).length(), 0);
    }

    #[test]
    fn sums_lengths() {
        let total: Time = [Time::new(30), Time::new(90)].into_iter().sum();
        assert_eq!(total, Time::new(120));
    }
}
