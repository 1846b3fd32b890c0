//! Core library for the Telegram weather bot.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstractions over the geocoding and weather providers
//! - The per-message lookup pipeline and reply rendering
//!
//! It is used by `weatherbot-telegram`, but can also be reused by other
//! front-ends (a CLI, a different messaging platform) without changes.

pub mod config;
pub mod error;
pub mod geocoder;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod reply;

pub use config::Config;
pub use error::LookupError;
pub use geocoder::Geocoder;
pub use model::{CandidateLocation, LookupOutcome, WeatherReport};
pub use pipeline::LookupPipeline;
pub use provider::WeatherProvider;
