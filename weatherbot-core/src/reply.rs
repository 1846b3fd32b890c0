//! User-facing reply texts and rendering.
//!
//! Replies use Telegram HTML markup; the front-end sends them with the HTML
//! parse mode. Every [`LookupOutcome`] and [`LookupError`] maps to exactly
//! one reply string.

use crate::{
    error::LookupError,
    model::{LookupOutcome, WeatherReport},
};

pub const EMPTY_QUERY: &str = "Введите название города.";
pub const NO_EXACT_MATCH: &str =
    "Совпадения найдены, но ни одно не соответствует точному городу.";
pub const WEATHER_ERROR: &str = "❌ Ошибка при получении погоды.";
pub const PROCESSING_ERROR: &str = "Произошла ошибка при обработке. Попробуйте позже.";

pub fn no_results(query: &str) -> String {
    format!("Не найдено результатов по запросу: {query}")
}

/// The multi-line weather reply, one emoji-labelled line per field.
pub fn weather_report(city: &str, report: &WeatherReport) -> String {
    format!(
        "🌦 Погода в <b>{city}</b>:\n\
         🌡 Температура: <b>{temp:.1}°C</b> (ощущается как {feels:.1}°C)\n\
         💧 Влажность: {humidity}%\n\
         💨 Ветер: {wind:.1} м/с\n\
         ☁️ Состояние: {condition}",
        temp = report.temperature_c,
        feels = report.feels_like_c,
        humidity = report.humidity_pct,
        wind = report.wind_speed_mps,
        condition = capitalize(&report.description),
    )
}

/// Render the qualifying-candidate listing. Logged for diagnostics; the
/// user-visible reply stays weather-only.
pub fn candidate_listing(matches: &[(usize, String)]) -> String {
    matches
        .iter()
        .map(|(i, address)| format!("{i}. 📍 <b>{address}</b>"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_outcome(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::EmptyQuery => EMPTY_QUERY.to_string(),
        LookupOutcome::NoResults { query } => no_results(query),
        LookupOutcome::NoExactMatch => NO_EXACT_MATCH.to_string(),
        LookupOutcome::Report { city, report, .. } => weather_report(city, report),
    }
}

/// Map a boundary failure to its user-facing text. Geocoding failures read
/// as a generic processing error; anything on the weather side reads as a
/// weather error.
pub fn render_error(err: &LookupError) -> &'static str {
    match err {
        LookupError::Geocoding(_) | LookupError::GeocodingStatus { .. } => PROCESSING_ERROR,
        LookupError::Weather(_)
        | LookupError::WeatherStatus { .. }
        | LookupError::WeatherParse(_) => WEATHER_ERROR,
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
