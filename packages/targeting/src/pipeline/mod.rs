//! The targeting pipeline.
//!
//! Orchestration order: load session, geocode the user's stated location,
//! predict applications, generate search terms per application, resolve
//! terms against the places API, dedup, assemble, write the output file,
//! upsert into the session store.

pub mod location;
pub mod prompts;
pub mod resolve;
pub mod run;

pub use location::extract_user_location;
pub use resolve::{dedup_places, resolve_application, ResolvedPlaces};
pub use run::{Pipeline, PipelineConfig};
