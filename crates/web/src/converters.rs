//! Display strings for list and detail pages.

use catalog_core::language::Language;
use catalog_core::time::Time;
use catalog_core::types::Seconds;
use catalog_facade::models::{Game, Genre, Medium, Program, Season};

/// Width of a displayed IMDB code.
const IMDB_CODE_DIGITS: usize = 7;

pub fn convert_length(length: Seconds) -> String {
    Time::new(length).to_string()
}

/// `"CZ, EN"`, or an empty string when there are no languages.
pub fn convert_languages(languages: &[Language]) -> String {
    join(languages.iter().map(ToString::to_string))
}

/// Length of every medium, comma separated.
pub fn convert_media(media: &[Medium]) -> String {
    join(media.iter().map(|medium| convert_length(medium.length)))
}

pub fn convert_movie_total_length(media: &[Medium]) -> String {
    media
        .iter()
        .map(|medium| Time::new(medium.length))
        .sum::<Time>()
        .to_string()
}

/// Summary of the extras bundled with a game, e.g. `"Crack, patch, saves"`.
pub fn convert_game_additional_data(game: &Game) -> String {
    let flags = [
        (game.crack, "crack"),
        (game.serial_key, "serial key"),
        (game.patch, "patch"),
        (game.trainer, "trainer"),
        (game.trainer_data, "data for trainer"),
        (game.editor, "editor"),
        (game.saves, "saves"),
    ];
    additional_data(&flags, game.other_data.as_deref())
}

pub fn convert_game_additional_data_content(game: &Game) -> bool {
    !convert_game_additional_data(game).is_empty()
}

pub fn convert_program_additional_data(program: &Program) -> String {
    let flags = [(program.crack, "crack"), (program.serial_key, "serial key")];
    additional_data(&flags, program.other_data.as_deref())
}

pub fn convert_program_additional_data_content(program: &Program) -> bool {
    !convert_program_additional_data(program).is_empty()
}

/// `"2000"` for a single year season, `"2000 - 2002"` otherwise.
pub fn convert_season_years(season: &Season) -> String {
    if season.start_year == season.end_year {
        season.start_year.to_string()
    } else {
        format!("{} - {}", season.start_year, season.end_year)
    }
}

pub fn convert_genres(genres: &[Genre]) -> String {
    join(genres.iter().map(|genre| genre.name.clone()))
}

/// Zero padded seven digit code as used in IMDB URLs.
pub fn convert_imdb_code(imdb_code: i32) -> String {
    format!("{imdb_code:0>width$}", width = IMDB_CODE_DIGITS)
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Enabled flags comma separated with the first one capitalised, followed by
/// any free text.
fn additional_data(flags: &[(bool, &str)], other_data: Option<&str>) -> String {
    let mut parts: Vec<String> = flags
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, label)| (*label).to_string())
        .collect();
    if let Some(first) = parts.first_mut() {
        *first = capitalize(first);
    }
    if let Some(other) = other_data.filter(|other| !other.trim().is_empty()) {
        parts.push(other.to_string());
    }
    parts.join(", ")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
