use serde::{Deserialize, Serialize};

/// Business status value for places that no longer operate.
pub const CLOSED_PERMANENTLY: &str = "CLOSED_PERMANENTLY";

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Text with an optional BCP-47 language tag, as the Places API returns names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub text: String,
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// A place record from the Places API (New), limited to the requested
/// field mask. Everything past the id is best-effort.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Place {
    /// Stable place identifier; empty when the API omits it.
    #[serde(default)]
    pub id: String,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<LocalizedText>,
    #[serde(rename = "formattedAddress", skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(rename = "nationalPhoneNumber", skip_serializing_if = "Option::is_none")]
    pub national_phone_number: Option<String>,
    #[serde(
        rename = "internationalPhoneNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub international_phone_number: Option<String>,
    #[serde(rename = "websiteUri", skip_serializing_if = "Option::is_none")]
    pub website_uri: Option<String>,
    #[serde(rename = "googleMapsUri", skip_serializing_if = "Option::is_none")]
    pub google_maps_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "userRatingCount", skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<i64>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(rename = "businessStatus", skip_serializing_if = "Option::is_none")]
    pub business_status: Option<String>,
}

impl Place {
    /// Whether the provider marked this business permanently closed.
    pub fn is_closed_permanently(&self) -> bool {
        self.business_status.as_deref() == Some(CLOSED_PERMANENTLY)
    }
}

/// Request body for `places:searchText`.
#[derive(Debug, Clone, Serialize)]
pub struct TextSearchRequest {
    #[serde(rename = "textQuery")]
    pub text_query: String,
    #[serde(rename = "locationBias", skip_serializing_if = "Option::is_none")]
    pub location_bias: Option<LocationBias>,
}

/// Circular search bias around a coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct LocationBias {
    pub circle: Circle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Circle {
    pub center: LatLng,
    /// Radius in meters.
    pub radius: f64,
}

/// Response body for `places:searchText`. The `places` key is absent
/// entirely when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

/// Response body from the Geocoding API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: GeocodeLatLng,
}

/// Geocoding coordinates; the legacy API uses lat/lng keys.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeocodeLatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeocodeLatLng> for LatLng {
    fn from(value: GeocodeLatLng) -> Self {
        LatLng::new(value.lat, value.lng)
    }
}
