//! Agent trait for LLM operations.
//!
//! The Agent trait abstracts the two LLM calls the pipeline makes:
//! - Predicting business applications from a conversation
//! - Generating places-search phrases for one application

use async_trait::async_trait;

use crate::error::Result;
use crate::types::results::{PredictionResult, SearchTerms};

/// Agent trait for LLM operations.
///
/// Implementations wrap a specific provider and enforce the structured
/// output schemas at the boundary, so callers never see free-form text.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Predict the business applications discussed in a conversation.
    ///
    /// `transcript` is the role-tagged rendering of the conversation.
    /// A failure here aborts the whole run.
    async fn extract_interests(&self, transcript: &str) -> Result<PredictionResult>;

    /// Generate a small set of places-search phrases for one application.
    ///
    /// Failures are isolated per application by the caller; the run
    /// continues with an empty phrase list.
    async fn generate_search_terms(&self, application: &str) -> Result<SearchTerms>;
}
