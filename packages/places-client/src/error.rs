use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacesError {
    /// Transport-level failure: connect, timeout, body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Geocoder answered with a status other than OK or ZERO_RESULTS.
    #[error("Geocoding failed: {0}")]
    Geocode(String),
}

pub type Result<T> = std::result::Result<T, PlacesError>;
