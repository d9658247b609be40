//! Pipeline orchestration.

use std::path::PathBuf;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::pipeline::location::extract_user_location;
use crate::pipeline::resolve::resolve_application;
use crate::traits::{Agent, PlacesApi, SessionStore};
use crate::types::conversation::ConversationLog;
use crate::types::results::{ChatOutputEntry, SearchQueryEntry, SearchQueryResults};

/// Pipeline settings.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Where the combined result document is written. Overwritten each run.
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("output.json"),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// The targeting pipeline over a session store, an LLM agent, and a
/// places API.
pub struct Pipeline<S, A, P> {
    store: S,
    agent: A,
    places: P,
    config: PipelineConfig,
}

impl<S: SessionStore, A: Agent, P: PlacesApi> Pipeline<S, A, P> {
    /// Create a pipeline with default settings.
    pub fn new(store: S, agent: A, places: P) -> Self {
        Self {
            store,
            agent,
            places,
            config: PipelineConfig::default(),
        }
    }

    /// Create a pipeline with custom settings.
    pub fn with_config(store: S, agent: A, places: P, config: PipelineConfig) -> Self {
        Self {
            store,
            agent,
            places,
            config,
        }
    }

    /// Access the underlying session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Access the underlying agent.
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Access the underlying places API.
    pub fn places(&self) -> &P {
        &self.places
    }

    /// Run the pipeline for one (user, session, chat).
    ///
    /// Returns `Ok(None)` when no conversation exists; nothing is written
    /// or stored in that case. Interest extraction and storage failures
    /// abort the run; search-term generation and individual places lookups
    /// degrade per application instead.
    pub async fn run(
        &self,
        user_id: &str,
        session_uuid: Uuid,
        chat_id: &str,
    ) -> Result<Option<SearchQueryResults>> {
        let entries = self
            .store
            .fetch_latest_session(session_uuid, user_id, chat_id)
            .await?;
        if entries.is_empty() {
            info!(%session_uuid, user_id, chat_id, "No valid session or QA items found");
            return Ok(None);
        }

        let log = ConversationLog::new(entries);
        let transcript = log.transcript();

        let coords = match extract_user_location(log.entries()) {
            Some(location) => match self.places.geocode(&location).await {
                Ok(Some(coords)) => {
                    info!(
                        location = %location,
                        latitude = coords.latitude,
                        longitude = coords.longitude,
                        "User location resolved"
                    );
                    Some(coords)
                }
                Ok(None) => {
                    debug!(location = %location, "Location did not geocode");
                    None
                }
                Err(e) => {
                    warn!(location = %location, error = %e, "Geocoding failed");
                    None
                }
            },
            None => None,
        };

        let prediction = self.agent.extract_interests(&transcript).await?;
        let applications = prediction.predicted_interests;
        info!(count = applications.len(), "Applications predicted");

        let mut targeting_keywords = Vec::with_capacity(applications.len());
        for application in &applications {
            let search_terms = match self.agent.generate_search_terms(application).await {
                Ok(terms) => terms.search_terms,
                Err(e) => {
                    error!(
                        application = %application,
                        error = %e,
                        "Search term generation failed"
                    );
                    Vec::new()
                }
            };

            let resolved = resolve_application(&self.places, &search_terms, coords).await;
            debug!(
                application = %application,
                places = resolved.places.len(),
                status = ?resolved.status,
                "Application resolved"
            );

            targeting_keywords.push(SearchQueryEntry {
                application: application.clone(),
                google_search_terms: search_terms,
                matched_places: resolved.places,
                status: resolved.status,
            });
        }

        let results = SearchQueryResults {
            extracted_applications: applications,
            targeting_keywords,
        };

        self.write_output(&results).await?;

        let output: Vec<ChatOutputEntry> = results
            .targeting_keywords
            .iter()
            .map(ChatOutputEntry::from_entry)
            .collect();
        self.store
            .upsert_chat_output(session_uuid, user_id, chat_id, &output)
            .await?;
        info!(chat_id, "Chat output stored");

        Ok(Some(results))
    }

    /// Serialize to pretty JSON and overwrite the output file.
    async fn write_output(&self, results: &SearchQueryResults) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        tokio::fs::write(&self.config.output_path, json).await?;
        info!(path = %self.config.output_path.display(), "Results saved");
        Ok(())
    }
}
