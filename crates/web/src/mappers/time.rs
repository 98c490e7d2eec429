use catalog_core::error::CoreError;
use catalog_core::time::Time;
use catalog_core::types::Seconds;

use super::parse_number;
use crate::forms::TimeFo;

pub fn map(length: Seconds) -> TimeFo {
    let time = Time::new(length);
    TimeFo {
        hours: time.hours().to_string(),
        minutes: time.minutes().to_string(),
        seconds: time.seconds().to_string(),
    }
}

pub fn map_back(source: &TimeFo) -> Result<Seconds, CoreError> {
    let hours = parse_number("hours", &source.hours)?;
    let minutes = parse_number("minutes", &source.minutes)?;
    let seconds = parse_number("seconds", &source.seconds)?;
    Time::from_parts(hours, minutes, seconds).map(Time::length)
}
