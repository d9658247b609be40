//! Place resolution: per-term search, status aggregation, and dedup.

use indexmap::IndexMap;
use places_client::{LatLng, Place};
use tracing::warn;

use crate::traits::PlacesApi;
use crate::types::results::SearchStatus;

/// Outcome of resolving one application's search terms.
#[derive(Debug, Clone)]
pub struct ResolvedPlaces {
    /// Unique open places, in first-seen order.
    pub places: Vec<Place>,
    /// Aggregate status across the application's terms.
    pub status: SearchStatus,
}

/// Run every search term for one application and aggregate the results.
///
/// A term that returns places marks the application OK; a failed lookup
/// marks it ERROR; an empty result leaves the running status untouched.
/// The fold is order-dependent: the last decisive term wins. Lookup
/// failures never abort the run.
pub async fn resolve_application<P: PlacesApi + ?Sized>(
    places_api: &P,
    terms: &[String],
    bias: Option<LatLng>,
) -> ResolvedPlaces {
    let mut all_places = Vec::new();
    let mut status = SearchStatus::ZeroResults;

    for term in terms {
        match places_api.search_text(term, bias).await {
            Ok(found) if !found.is_empty() => {
                status = SearchStatus::Ok;
                all_places.extend(found);
            }
            Ok(_) => {}
            Err(e) => {
                warn!(term = %term, error = %e, "Places lookup failed");
                status = SearchStatus::Error;
            }
        }
    }

    ResolvedPlaces {
        places: dedup_places(all_places),
        status,
    }
}

/// Keep one place per identifier, dropping permanently closed businesses
/// and records without an id.
///
/// When an id repeats, the last record wins but keeps the position of the
/// first. Output order is first-insertion order.
pub fn dedup_places(places: Vec<Place>) -> Vec<Place> {
    let mut unique: IndexMap<String, Place> = IndexMap::new();
    for place in places {
        if place.id.is_empty() || place.is_closed_permanently() {
            continue;
        }
        unique.insert(place.id.clone(), place);
    }
    unique.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_place, MockPlaces};
    use places_client::CLOSED_PERMANENTLY;

    fn term_list(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn dedup_keeps_first_position_and_last_value() {
        let places = vec![
            test_place("a", "First A"),
            test_place("b", "B"),
            test_place("a", "Updated A"),
        ];

        let unique = dedup_places(places);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].id, "a");
        assert_eq!(unique[0].display_name.as_ref().unwrap().text, "Updated A");
        assert_eq!(unique[1].id, "b");
    }

    #[test]
    fn dedup_drops_closed_and_id_less_records() {
        let mut closed = test_place("c", "Closed");
        closed.business_status = Some(CLOSED_PERMANENTLY.to_string());
        let no_id = test_place("", "Anonymous");

        let unique = dedup_places(vec![test_place("a", "A"), closed, no_id]);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].id, "a");
    }

    #[tokio::test]
    async fn status_is_zero_results_when_every_term_is_empty() {
        let api = MockPlaces::new();
        let resolved = resolve_application(&api, &term_list(&["bakery", "cake shop"]), None).await;
        assert_eq!(resolved.status, SearchStatus::ZeroResults);
        assert!(resolved.places.is_empty());
    }

    #[tokio::test]
    async fn a_failure_after_a_hit_still_reports_error() {
        let api = MockPlaces::new()
            .with_places("bakery", vec![test_place("a", "A")])
            .with_failing_term("cake shop");

        let resolved = resolve_application(&api, &term_list(&["bakery", "cake shop"]), None).await;
        assert_eq!(resolved.status, SearchStatus::Error);
        // Places from the good term are still kept.
        assert_eq!(resolved.places.len(), 1);
    }

    #[tokio::test]
    async fn a_hit_after_a_failure_reports_ok() {
        let api = MockPlaces::new()
            .with_failing_term("bakery")
            .with_places("cake shop", vec![test_place("a", "A")]);

        let resolved = resolve_application(&api, &term_list(&["bakery", "cake shop"]), None).await;
        assert_eq!(resolved.status, SearchStatus::Ok);
    }

    #[tokio::test]
    async fn empty_terms_after_a_hit_keep_ok() {
        let api = MockPlaces::new().with_places("bakery", vec![test_place("a", "A")]);

        let resolved = resolve_application(&api, &term_list(&["bakery", "cake shop"]), None).await;
        assert_eq!(resolved.status, SearchStatus::Ok);
    }

    #[tokio::test]
    async fn results_merge_across_terms_with_dedup() {
        let api = MockPlaces::new()
            .with_places("bakery", vec![test_place("a", "A"), test_place("b", "B")])
            .with_places("cake shop", vec![test_place("a", "A again"), test_place("c", "C")]);

        let resolved = resolve_application(&api, &term_list(&["bakery", "cake shop"]), None).await;
        let ids: Vec<&str> = resolved.places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(resolved.places[0].display_name.as_ref().unwrap().text, "A again");
    }

    #[tokio::test]
    async fn no_terms_means_zero_results_without_lookups() {
        let api = MockPlaces::new();
        let resolved = resolve_application(&api, &[], None).await;
        assert_eq!(resolved.status, SearchStatus::ZeroResults);
        assert!(api.searches().is_empty());
    }
}
