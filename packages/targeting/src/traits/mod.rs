//! Trait seams for the pipeline's external collaborators.

pub mod agent;
pub mod places;
pub mod store;

pub use agent::Agent;
pub use places::PlacesApi;
pub use store::SessionStore;
