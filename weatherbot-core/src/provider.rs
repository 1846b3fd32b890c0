use crate::{error::Result, model::WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the weather provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for the given coordinates.
    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherReport>;
}
