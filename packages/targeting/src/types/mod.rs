//! Domain types for the targeting library.

pub mod conversation;
pub mod results;
