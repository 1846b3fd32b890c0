use tracing::debug;

use crate::{
    config::Config,
    error::Result,
    geocoder::{nominatim::NominatimGeocoder, Geocoder},
    model::{CandidateLocation, LookupOutcome},
    provider::{openweather::OpenWeatherProvider, WeatherProvider},
};

/// How many geocoding candidates the selection policy considers.
pub const MAX_CANDIDATES: usize = 10;

/// Trigger words stripped from the message to isolate the city name.
const TRIGGER_WORDS: [&str; 2] = ["погода в", "погода"];

/// Strip whitespace and the trigger words from a message, leaving the city
/// name. Returns an empty string when nothing is left.
pub fn extract_city(text: &str) -> String {
    let mut city = text.trim().to_string();
    for word in TRIGGER_WORDS {
        city = city.replace(word, "");
    }
    city.trim().to_string()
}

/// Qualifying candidates among the first [`MAX_CANDIDATES`], in provider
/// order, as (1-based index, candidate). A candidate qualifies when the
/// lowercased query appears as a substring of its lowercased address.
pub fn qualifying_candidates<'a>(
    query: &str,
    candidates: &'a [CandidateLocation],
) -> Vec<(usize, &'a CandidateLocation)> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .take(MAX_CANDIDATES)
        .enumerate()
        .filter(|(_, c)| c.address.to_lowercase().contains(&needle))
        .map(|(i, c)| (i + 1, c))
        .collect()
}

/// The per-message lookup pipeline: city extraction, geocoding, candidate
/// selection, weather fetch.
///
/// Holds no per-message state; one instance is shared by all in-flight
/// messages.
#[derive(Debug)]
pub struct LookupPipeline {
    geocoder: Box<dyn Geocoder>,
    weather: Box<dyn WeatherProvider>,
}

impl LookupPipeline {
    pub fn new(geocoder: Box<dyn Geocoder>, weather: Box<dyn WeatherProvider>) -> Self {
        Self { geocoder, weather }
    }

    /// Production wiring: Nominatim for geocoding, OpenWeather for weather.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let geocoder = NominatimGeocoder::new()?;
        let weather = OpenWeatherProvider::new(config.weather_api_key.clone());
        Ok(Self::new(Box::new(geocoder), Box::new(weather)))
    }

    /// Run the whole pipeline for one message's text.
    ///
    /// `Ok` covers every terminal branch that is not a provider failure; the
    /// weather call only happens once a candidate was selected.
    pub async fn lookup(&self, text: &str) -> Result<LookupOutcome> {
        let city = extract_city(text);
        if city.is_empty() {
            return Ok(LookupOutcome::EmptyQuery);
        }

        let candidates = self.geocoder.search(&city).await?;
        if candidates.is_empty() {
            return Ok(LookupOutcome::NoResults { query: city });
        }

        let matches = qualifying_candidates(&city, &candidates);
        let Some((_, selected)) = matches.first() else {
            debug!(query = %city, candidates = candidates.len(), "no candidate matched the query");
            return Ok(LookupOutcome::NoExactMatch);
        };

        debug!(
            query = %city,
            selected = %selected.address,
            matched = matches.len(),
            "selected first qualifying candidate"
        );

        let report = self
            .weather
            .current_weather(selected.latitude, selected.longitude)
            .await?;

        let matches = matches
            .into_iter()
            .map(|(i, c)| (i, c.address.clone()))
            .collect();

        Ok(LookupOutcome::Report {
            city,
            matches,
            report,
        })
    }
}
