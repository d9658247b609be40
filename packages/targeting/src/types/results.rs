//! Result types produced by the pipeline, plus the store-facing reshape.

use places_client::Place;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Business applications predicted from a conversation.
///
/// Structured output of the interest-extraction call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PredictionResult {
    /// Interest topics the user wants to pursue, as short category phrases.
    pub predicted_interests: Vec<String>,
}

/// Search phrases generated for one application.
///
/// Structured output of the search-term call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchTerms {
    pub search_terms: Vec<String>,
}

/// Coarse outcome of resolving one application against the places API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    /// At least one term returned places.
    Ok,
    /// Every term came back empty.
    ZeroResults,
    /// A lookup failed outright.
    Error,
}

/// Places matched for one predicted application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQueryEntry {
    pub application: String,
    pub google_search_terms: Vec<String>,
    pub matched_places: Vec<Place>,
    pub status: SearchStatus,
}

/// The combined result document for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQueryResults {
    pub extracted_applications: Vec<String>,
    pub targeting_keywords: Vec<SearchQueryEntry>,
}

/// Store-facing reshape of a [`SearchQueryEntry`].
///
/// This is the form persisted under `chats.<chat_id>.output`; consumers
/// expect every company field present, with nulls for gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutputEntry {
    pub application: String,
    pub search_terms: Vec<String>,
    pub companies: Vec<Company>,
}

impl ChatOutputEntry {
    /// Reshape one result entry into the document-store form.
    pub fn from_entry(entry: &SearchQueryEntry) -> Self {
        Self {
            application: entry.application.clone(),
            search_terms: entry.google_search_terms.clone(),
            companies: entry.matched_places.iter().map(Company::from_place).collect(),
        }
    }
}

/// Flattened company record inside a [`ChatOutputEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: CompanyLocation,
    pub phone: CompanyPhone,
    pub website: Option<String>,
    pub google_maps_url: Option<String>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<i64>,
    pub types: Vec<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyPhone {
    pub national: Option<String>,
    pub international: Option<String>,
}

impl Company {
    fn from_place(place: &Place) -> Self {
        Self {
            name: place.display_name.as_ref().map(|name| name.text.clone()),
            address: place.formatted_address.clone(),
            location: CompanyLocation {
                latitude: place.location.as_ref().map(|l| l.latitude),
                longitude: place.location.as_ref().map(|l| l.longitude),
            },
            phone: CompanyPhone {
                national: place.national_phone_number.clone(),
                international: place.international_phone_number.clone(),
            },
            website: place.website_uri.clone(),
            google_maps_url: place.google_maps_uri.clone(),
            rating: place.rating,
            user_rating_count: place.user_rating_count,
            types: place.types.clone(),
            status: place.business_status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use places_client::{LatLng, LocalizedText};

    #[test]
    fn search_status_uses_wire_names() {
        assert_eq!(
            serde_json::to_value(SearchStatus::Ok).unwrap(),
            serde_json::json!("OK")
        );
        assert_eq!(
            serde_json::to_value(SearchStatus::ZeroResults).unwrap(),
            serde_json::json!("ZERO_RESULTS")
        );
        assert_eq!(
            serde_json::to_value(SearchStatus::Error).unwrap(),
            serde_json::json!("ERROR")
        );
    }

    #[test]
    fn reshape_flattens_a_full_place() {
        let place = Place {
            id: "abc".to_string(),
            display_name: Some(LocalizedText {
                text: "Crust Bakery".to_string(),
                language_code: Some("en".to_string()),
            }),
            formatted_address: Some("12 Main St".to_string()),
            location: Some(LatLng::new(31.5, 74.3)),
            national_phone_number: Some("(042) 111".to_string()),
            international_phone_number: Some("+92 42 111".to_string()),
            website_uri: Some("https://crust.example".to_string()),
            google_maps_uri: Some("https://maps.google.com/?cid=1".to_string()),
            rating: Some(4.4),
            user_rating_count: Some(812),
            types: vec!["bakery".to_string()],
            business_status: Some("OPERATIONAL".to_string()),
        };
        let entry = SearchQueryEntry {
            application: "bakery".to_string(),
            google_search_terms: vec!["bakery near me".to_string()],
            matched_places: vec![place],
            status: SearchStatus::Ok,
        };

        let output = ChatOutputEntry::from_entry(&entry);
        assert_eq!(output.application, "bakery");
        assert_eq!(output.search_terms, vec!["bakery near me"]);

        let company = &output.companies[0];
        assert_eq!(company.name.as_deref(), Some("Crust Bakery"));
        assert_eq!(company.location.latitude, Some(31.5));
        assert_eq!(company.phone.national.as_deref(), Some("(042) 111"));
        assert_eq!(company.google_maps_url.as_deref(), Some("https://maps.google.com/?cid=1"));
        assert_eq!(company.status.as_deref(), Some("OPERATIONAL"));
    }

    #[test]
    fn reshape_keeps_nulls_for_sparse_places() {
        let entry = SearchQueryEntry {
            application: "bakery".to_string(),
            google_search_terms: vec![],
            matched_places: vec![Place {
                id: "abc".to_string(),
                ..Place::default()
            }],
            status: SearchStatus::Ok,
        };

        let output = ChatOutputEntry::from_entry(&entry);
        let company = serde_json::to_value(&output.companies[0]).unwrap();

        // Consumers rely on every key being present, null where unknown.
        assert_eq!(company["name"], serde_json::Value::Null);
        assert_eq!(company["location"]["latitude"], serde_json::Value::Null);
        assert_eq!(company["location"]["longitude"], serde_json::Value::Null);
        assert_eq!(company["phone"]["national"], serde_json::Value::Null);
        assert_eq!(company["website"], serde_json::Value::Null);
        assert_eq!(company["google_maps_url"], serde_json::Value::Null);
        assert_eq!(company["types"], serde_json::json!([]));
        assert_eq!(company["status"], serde_json::Value::Null);
    }
}
