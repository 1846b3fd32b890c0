use thiserror::Error;

/// Failures at the pipeline's I/O boundaries.
///
/// Each boundary gets its own variant instead of a single catch-all, so the
/// front-end can map every failure to its own user-facing text and tests can
/// assert which boundary failed. Variants carry rendered messages rather than
/// provider error types so test doubles can construct them.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Geocoding request failed: {0}")]
    Geocoding(String),

    #[error("Geocoding service returned status {status}: {body}")]
    GeocodingStatus { status: u16, body: String },

    #[error("Weather request failed: {0}")]
    Weather(String),

    #[error("Weather service returned status {status}: {body}")]
    WeatherStatus { status: u16, body: String },

    #[error("Weather response could not be parsed: {0}")]
    WeatherParse(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;

/// Cap provider bodies carried inside error variants; they end up in logs.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
