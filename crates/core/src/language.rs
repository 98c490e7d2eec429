//! Languages of movies, seasons and their subtitles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Cz,
    En,
    Fr,
    Jp,
    Sk,
}

impl Language {
    /// Every language, in display order.
    pub const ALL: [Language; 5] = [
        Language::Cz,
        Language::En,
        Language::Fr,
        Language::Jp,
        Language::Sk,
    ];

    /// Languages offered for subtitles.
    pub const SUBTITLES: [Language; 2] = [Language::Cz, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Cz => "CZ",
            Language::En => "EN",
            Language::Fr => "FR",
            Language::Jp => "JP",
            Language::Sk => "SK",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown language: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_codes() {
        assert_eq!("JP".parse::<Language>().unwrap(), Language::Jp);
        assert_matches!("jp".parse::<Language>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn displays_codes_in_order() {
        let codes: Vec<String> = Language::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(codes, ["CZ", "EN", "FR", "JP", "SK"]);
    }
}
