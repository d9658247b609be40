//! Pure Google Maps Platform REST client.
//!
//! A minimal client for two endpoints: Places API (New) text search and the
//! Geocoding API. Supports biasing text searches around a coordinate.
//!
//! # Example
//!
//! ```rust,ignore
//! use places_client::PlacesClient;
//!
//! let client = PlacesClient::new("your-api-key".into());
//!
//! let coords = client.geocode("Lahore, Pakistan").await?;
//! let places = client.search_text("bakery near me", coords).await?;
//! for place in &places {
//!     println!("{}", place.formatted_address.as_deref().unwrap_or("(no address)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{PlacesError, Result};
pub use types::{LatLng, LocalizedText, Place, CLOSED_PERMANENTLY};

use types::{Circle, GeocodeResponse, LocationBias, TextSearchRequest, TextSearchResponse};

const PLACES_BASE_URL: &str = "https://places.googleapis.com/v1";
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Field mask sent with every text search. Responses carry only the fields
/// named here.
const PLACE_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.location,places.nationalPhoneNumber,places.internationalPhoneNumber,\
places.websiteUri,places.googleMapsUri,places.rating,places.userRatingCount,\
places.types,places.businessStatus";

const DEFAULT_BIAS_RADIUS_METERS: f64 = 5000.0;

pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    bias_radius_meters: f64,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            bias_radius_meters: DEFAULT_BIAS_RADIUS_METERS,
        }
    }

    /// Set the bias circle radius used when a search is given a center.
    pub fn with_bias_radius(mut self, meters: f64) -> Self {
        self.bias_radius_meters = meters;
        self
    }

    /// Find places matching a free-text query, optionally biased around a
    /// coordinate. Returns an empty Vec when nothing matched.
    pub async fn search_text(&self, query: &str, bias: Option<LatLng>) -> Result<Vec<Place>> {
        let request = TextSearchRequest {
            text_query: query.to_string(),
            location_bias: bias.map(|center| LocationBias {
                circle: Circle {
                    center,
                    radius: self.bias_radius_meters,
                },
            }),
        };

        let url = format!("{}/places:searchText", PLACES_BASE_URL);
        let resp = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", PLACE_FIELD_MASK)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: TextSearchResponse = resp.json().await?;
        tracing::debug!(query, count = parsed.places.len(), "Text search returned");
        Ok(parsed.places)
    }

    /// Resolve a free-text location description to coordinates. Returns
    /// `Ok(None)` when the geocoder finds nothing.
    pub async fn geocode(&self, address: &str) -> Result<Option<LatLng>> {
        let resp = self
            .client
            .get(GEOCODE_URL)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GeocodeResponse = resp.json().await?;
        match parsed.status.as_str() {
            "OK" => {
                let coords = parsed
                    .results
                    .into_iter()
                    .next()
                    .map(|result| result.geometry.location.into());
                tracing::debug!(address, found = coords.is_some(), "Geocode resolved");
                Ok(coords)
            }
            "ZERO_RESULTS" => Ok(None),
            other => Err(PlacesError::Geocode(format!(
                "{}: {}",
                other,
                parsed.error_message.unwrap_or_default()
            ))),
        }
    }
}
