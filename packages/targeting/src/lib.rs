//! Conversation-Driven Local Business Targeting
//!
//! Takes a stored business-discovery chat session, predicts the business
//! applications (interest topics) the user cares about, generates places
//! search phrases per application, resolves them against the Google Maps
//! Platform, and persists a combined result document.
//!
//! # Usage
//!
//! ```rust,ignore
//! use targeting::{MemoryStore, Pipeline};
//! use targeting::testing::{MockAgent, MockPlaces};
//!
//! let store = MemoryStore::new();
//! let agent = MockAgent::new().with_interests(&["bakery"]);
//! let places = MockPlaces::new();
//!
//! let pipeline = Pipeline::new(store, agent, places);
//! let results = pipeline.run("user-1", session_uuid, "chat-1").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Agent, PlacesApi, SessionStore)
//! - [`types`] - Conversation and result types
//! - [`pipeline`] - Orchestration, prompts, location, resolution
//! - [`agent`] - OpenAI implementation of the Agent trait
//! - [`stores`] - Session store implementations (MemoryStore, PostgresStore)
//! - [`testing`] - Mock implementations for testing

pub mod agent;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{Result, TargetingError};
pub use traits::{Agent, PlacesApi, SessionStore};
pub use types::{
    conversation::{ChatMessage, ConversationEntry, ConversationLog, Role},
    results::{
        ChatOutputEntry, Company, CompanyLocation, CompanyPhone, PredictionResult,
        SearchQueryEntry, SearchQueryResults, SearchStatus, SearchTerms,
    },
};

// Re-export pipeline components
pub use pipeline::{
    dedup_places, extract_user_location, resolve_application, Pipeline, PipelineConfig,
    ResolvedPlaces,
};

// Re-export implementations
pub use agent::OpenAiAgent;
pub use stores::{MemoryStore, PostgresStore};
