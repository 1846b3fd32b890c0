use crate::{error::Result, model::CandidateLocation};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nominatim;

/// Abstraction over the geocoding provider.
///
/// The pipeline only needs free-text search; keeping it behind a trait lets
/// tests drive the selection logic with canned candidates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Look up candidate locations for a free-text place name, in provider
    /// order. An empty vector is a valid answer, not an error.
    async fn search(&self, query: &str) -> Result<Vec<CandidateLocation>>;
}
