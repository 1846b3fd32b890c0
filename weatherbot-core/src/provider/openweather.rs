use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{truncate_body, LookupError, Result},
    model::WeatherReport,
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Current weather from OpenWeather, metric units, Russian descriptions.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at a different endpoint (tests use a local mock).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherReport> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", latitude.to_string().as_str()),
                ("lon", longitude.to_string().as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "ru"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Weather(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Weather(e.to_string()))?;

        if !status.is_success() {
            return Err(LookupError::WeatherStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| LookupError::WeatherParse(e.to_string()))?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| {
                LookupError::WeatherParse("weather conditions list is empty".to_string())
            })?;

        Ok(WeatherReport {
            description,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
        })
    }
}
