use serde::{Deserialize, Serialize};

/// A geocoding result considered for selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateLocation {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at the selected location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
}

/// One terminal branch of the per-message pipeline.
///
/// Every variant renders to exactly one reply; provider failures are not an
/// outcome but a [`crate::LookupError`].
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// Nothing left after stripping the trigger words.
    EmptyQuery,
    /// The geocoder returned zero candidates.
    NoResults { query: String },
    /// Candidates came back, but none contains the query as a substring.
    NoExactMatch,
    /// Weather was fetched for the first qualifying candidate.
    Report {
        city: String,
        /// Qualifying candidates as (1-based provider index, address).
        /// Kept for logging; the reply itself shows only the weather.
        matches: Vec<(usize, String)>,
        report: WeatherReport,
    },
}
