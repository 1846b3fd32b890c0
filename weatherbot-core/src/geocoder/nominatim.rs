use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::{truncate_body, LookupError, Result},
    model::CandidateLocation,
};

use super::Geocoder;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = "weather_bot/0.1";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Free-text search against Nominatim (OpenStreetMap).
///
/// Results are restricted to one country and capped at the candidate limit
/// the selection policy considers.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: Client,
    base_url: String,
    country_codes: String,
    limit: usize,
}

impl NominatimGeocoder {
    /// Candidates requested per query; matches the selection policy's cap.
    pub const CANDIDATE_LIMIT: usize = 10;

    pub fn new() -> AnyResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the geocoder at a different endpoint (tests use a local mock).
    pub fn with_base_url(base_url: impl Into<String>) -> AnyResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build Nominatim HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            country_codes: "ru".to_string(),
            limit: Self::CANDIDATE_LIMIT,
        })
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    // Nominatim serializes coordinates as strings.
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn into_candidate(self) -> Result<CandidateLocation> {
        let latitude = self.lat.parse::<f64>().map_err(|e| {
            LookupError::Geocoding(format!("invalid latitude '{}': {e}", self.lat))
        })?;
        let longitude = self.lon.parse::<f64>().map_err(|e| {
            LookupError::Geocoding(format!("invalid longitude '{}': {e}", self.lon))
        })?;

        Ok(CandidateLocation {
            address: self.display_name,
            latitude,
            longitude,
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<CandidateLocation>> {
        let url = format!("{}/search", self.base_url);
        let limit = self.limit.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("countrycodes", self.country_codes.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Geocoding(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Geocoding(e.to_string()))?;

        if !status.is_success() {
            return Err(LookupError::GeocodingStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let places: Vec<NominatimPlace> = serde_json::from_str(&body)
            .map_err(|e| LookupError::Geocoding(format!("invalid search response: {e}")))?;

        places.into_iter().map(NominatimPlace::into_candidate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_maps_places_to_candidates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "Москва".into()),
                mockito::Matcher::UrlEncoded("countrycodes".into(), "ru".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "10".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"[{"display_name":"Москва, Россия","lat":"55.7558","lon":"37.6173"}]"#,
            )
            .create_async()
            .await;

        let geocoder = NominatimGeocoder::with_base_url(server.url()).unwrap();
        let candidates = geocoder.search("Москва").await.unwrap();

        mock.assert_async().await;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].address, "Москва, Россия");
        assert!((candidates[0].latitude - 55.7558).abs() < 1e-9);
        assert!((candidates[0].longitude - 37.6173).abs() < 1e-9);
    }

    #[tokio::test]
    async fn search_returns_empty_for_no_places() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let geocoder = NominatimGeocoder::with_base_url(server.url()).unwrap();
        let candidates = geocoder.search("Нигде").await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn search_surfaces_http_status_failures() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let geocoder = NominatimGeocoder::with_base_url(server.url()).unwrap();
        let err = geocoder.search("Москва").await.unwrap_err();

        match err {
            LookupError::GeocodingStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected GeocodingStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_rejects_malformed_coordinates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"display_name":"Москва","lat":"not-a-number","lon":"37.6"}]"#)
            .create_async()
            .await;

        let geocoder = NominatimGeocoder::with_base_url(server.url()).unwrap();
        let err = geocoder.search("Москва").await.unwrap_err();
        assert!(matches!(err, LookupError::Geocoding(_)));
    }
}
