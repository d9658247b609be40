//! Testing utilities including mock implementations.
//!
//! These are useful for exercising the pipeline without real LLM or
//! places API calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use places_client::{LatLng, LocalizedText, Place, PlacesError};

use crate::error::{Result, TargetingError};
use crate::traits::{Agent, PlacesApi};
use crate::types::results::{PredictionResult, SearchTerms};

/// A mock agent for testing.
///
/// Returns configured interests and per-application search terms.
/// Applications marked as failing produce an error instead, and every
/// call is recorded for assertions.
#[derive(Default)]
pub struct MockAgent {
    /// Predicted applications to return
    interests: RwLock<Vec<String>>,

    /// Whether interest extraction should fail
    fail_extraction: RwLock<bool>,

    /// Predefined search terms by application
    terms: RwLock<HashMap<String, Vec<String>>>,

    /// Applications whose search-term call should fail
    failing_applications: RwLock<Vec<String>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockAgentCall>>>,
}

/// Record of a call made to the mock agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAgentCall {
    ExtractInterests,
    GenerateSearchTerms { application: String },
}

impl MockAgent {
    /// Create a new mock agent with no scripted behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the predicted applications.
    pub fn with_interests(self, interests: &[&str]) -> Self {
        *self.interests.write().unwrap() = interests.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Make interest extraction fail.
    pub fn with_failing_extraction(self) -> Self {
        *self.fail_extraction.write().unwrap() = true;
        self
    }

    /// Script search terms for an application.
    pub fn with_terms(self, application: impl Into<String>, terms: &[&str]) -> Self {
        self.terms
            .write()
            .unwrap()
            .insert(application.into(), terms.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Make search-term generation fail for an application.
    pub fn with_failing_terms(self, application: impl Into<String>) -> Self {
        self.failing_applications
            .write()
            .unwrap()
            .push(application.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockAgentCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Agent for MockAgent {
    async fn extract_interests(&self, _transcript: &str) -> Result<PredictionResult> {
        self.calls
            .write()
            .unwrap()
            .push(MockAgentCall::ExtractInterests);

        if *self.fail_extraction.read().unwrap() {
            return Err(TargetingError::Agent("mock extraction failure".into()));
        }

        Ok(PredictionResult {
            predicted_interests: self.interests.read().unwrap().clone(),
        })
    }

    async fn generate_search_terms(&self, application: &str) -> Result<SearchTerms> {
        self.calls
            .write()
            .unwrap()
            .push(MockAgentCall::GenerateSearchTerms {
                application: application.to_string(),
            });

        if self
            .failing_applications
            .read()
            .unwrap()
            .iter()
            .any(|a| a == application)
        {
            return Err(TargetingError::Agent(
                format!("mock term failure for '{}'", application).into(),
            ));
        }

        Ok(SearchTerms {
            search_terms: self
                .terms
                .read()
                .unwrap()
                .get(application)
                .cloned()
                .unwrap_or_default(),
        })
    }
}

/// A mock places API for testing.
///
/// Returns predefined places per search term without network requests.
#[derive(Default)]
pub struct MockPlaces {
    /// Predefined places by search term
    results: RwLock<HashMap<String, Vec<Place>>>,

    /// Terms whose lookup should fail
    failing_terms: RwLock<Vec<String>>,

    /// Predefined geocodes by location text
    geocodes: RwLock<HashMap<String, LatLng>>,

    /// Search calls seen, with the bias each carried
    searches: Arc<RwLock<Vec<(String, Option<LatLng>)>>>,
}

impl MockPlaces {
    /// Create a new mock places API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script places for a search term.
    pub fn with_places(self, term: impl Into<String>, places: Vec<Place>) -> Self {
        self.results.write().unwrap().insert(term.into(), places);
        self
    }

    /// Make a search term fail.
    pub fn with_failing_term(self, term: impl Into<String>) -> Self {
        self.failing_terms.write().unwrap().push(term.into());
        self
    }

    /// Script a geocoding result.
    pub fn with_geocode(self, location: impl Into<String>, coords: LatLng) -> Self {
        self.geocodes.write().unwrap().insert(location.into(), coords);
        self
    }

    /// Search terms seen, in order.
    pub fn searches(&self) -> Vec<String> {
        self.searches
            .read()
            .unwrap()
            .iter()
            .map(|(term, _)| term.clone())
            .collect()
    }

    /// Search calls seen with the bias each carried, in order.
    pub fn search_calls(&self) -> Vec<(String, Option<LatLng>)> {
        self.searches.read().unwrap().clone()
    }
}

#[async_trait]
impl PlacesApi for MockPlaces {
    async fn geocode(&self, location: &str) -> Result<Option<LatLng>> {
        Ok(self.geocodes.read().unwrap().get(location).copied())
    }

    async fn search_text(&self, term: &str, bias: Option<LatLng>) -> Result<Vec<Place>> {
        self.searches
            .write()
            .unwrap()
            .push((term.to_string(), bias));

        if self.failing_terms.read().unwrap().iter().any(|t| t == term) {
            return Err(PlacesError::Api {
                status: 500,
                message: "mock lookup failure".to_string(),
            }
            .into());
        }

        Ok(self
            .results
            .read()
            .unwrap()
            .get(term)
            .cloned()
            .unwrap_or_default())
    }
}

/// Build a minimal open place for tests.
pub fn test_place(id: &str, name: &str) -> Place {
    Place {
        id: id.to_string(),
        display_name: Some(LocalizedText {
            text: name.to_string(),
            language_code: None,
        }),
        ..Place::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_agent_scripted_interests() {
        let agent = MockAgent::new().with_interests(&["bakery", "car wash"]);

        let prediction = agent.extract_interests("user: hi").await.unwrap();
        assert_eq!(prediction.predicted_interests, vec!["bakery", "car wash"]);

        let calls = agent.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], MockAgentCall::ExtractInterests));
    }

    #[tokio::test]
    async fn test_mock_agent_per_application_failure() {
        let agent = MockAgent::new()
            .with_terms("bakery", &["bakery near me"])
            .with_failing_terms("car wash");

        let terms = agent.generate_search_terms("bakery").await.unwrap();
        assert_eq!(terms.search_terms, vec!["bakery near me"]);

        let result = agent.generate_search_terms("car wash").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_places_records_bias() {
        let api = MockPlaces::new().with_places("bakery", vec![test_place("a", "A")]);
        let bias = Some(LatLng::new(31.5, 74.3));

        let places = api.search_text("bakery", bias).await.unwrap();
        assert_eq!(places.len(), 1);

        let calls = api.search_calls();
        assert_eq!(calls, vec![("bakery".to_string(), bias)]);
    }

    #[tokio::test]
    async fn test_mock_places_geocode() {
        let api = MockPlaces::new().with_geocode("Lahore, Pakistan", LatLng::new(31.5, 74.3));

        let coords = api.geocode("Lahore, Pakistan").await.unwrap();
        assert_eq!(coords, Some(LatLng::new(31.5, 74.3)));

        let missing = api.geocode("Nowhere").await.unwrap();
        assert_eq!(missing, None);
    }
}
