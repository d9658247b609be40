//! LLM agent implementations.

pub mod openai;
pub mod schema;

pub use openai::OpenAiAgent;
pub use schema::StructuredOutput;
