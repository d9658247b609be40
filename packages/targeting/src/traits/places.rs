//! Places-search boundary.

use async_trait::async_trait;
use places_client::{LatLng, Place, PlacesClient};

use crate::error::Result;

/// Geocoding and text-search operations against a places provider.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Resolve a free-text location description to coordinates.
    /// Returns `Ok(None)` when the provider finds nothing.
    async fn geocode(&self, location: &str) -> Result<Option<LatLng>>;

    /// Find places matching a search term, optionally biased around a point.
    async fn search_text(&self, term: &str, bias: Option<LatLng>) -> Result<Vec<Place>>;
}

#[async_trait]
impl PlacesApi for PlacesClient {
    async fn geocode(&self, location: &str) -> Result<Option<LatLng>> {
        Ok(PlacesClient::geocode(self, location).await?)
    }

    async fn search_text(&self, term: &str, bias: Option<LatLng>) -> Result<Vec<Place>> {
        Ok(PlacesClient::search_text(self, term, bias).await?)
    }
}
