//! OpenAI implementation of the Agent trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use targeting::agent::OpenAiAgent;
//!
//! let agent = OpenAiAgent::new("sk-...").with_model("gpt-4o-mini");
//! let prediction = agent.extract_interests(&transcript).await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::agent::schema::StructuredOutput;
use crate::error::{Result, TargetingError};
use crate::pipeline::prompts::{format_extraction_prompt, format_search_terms_prompt};
use crate::traits::Agent;
use crate::types::results::{PredictionResult, SearchTerms};

/// OpenAI-based agent implementation.
///
/// Both prompts go through strict `json_schema` structured outputs, so a
/// response that drifts from the expected shape is rejected here rather
/// than surfacing as garbage downstream.
#[derive(Clone)]
pub struct OpenAiAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiAgent {
    /// Create a new agent with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| TargetingError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model (default: gpt-3.5-turbo).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies or compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Make one structured-output chat completion and deserialize the reply.
    async fn generate_structured<T>(&self, schema_name: &'static str, prompt: &str) -> Result<T>
    where
        T: StructuredOutput,
    {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: JsonSchemaFormat {
                    name: schema_name.to_string(),
                    strict: true,
                    schema: T::openai_schema(),
                },
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TargetingError::Agent(e.to_string().into()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TargetingError::Agent(
                format!("OpenAI API error: {}", error_text).into(),
            ));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| TargetingError::Agent(e.to_string().into()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| TargetingError::Agent("No response from OpenAI".into()))?;

        parse_structured(schema_name, &content)
    }
}

/// Deserialize a structured reply, tolerating a markdown code fence.
fn parse_structured<T: DeserializeOwned>(expected: &'static str, content: &str) -> Result<T> {
    serde_json::from_str(content)
        .or_else(|_| {
            let json_str = content
                .trim()
                .trim_start_matches("```json")
                .trim_start_matches("```")
                .trim_end_matches("```")
                .trim();
            serde_json::from_str(json_str)
        })
        .map_err(|e| TargetingError::AgentSchema {
            expected,
            reason: e.to_string(),
        })
}

#[async_trait]
impl Agent for OpenAiAgent {
    async fn extract_interests(&self, transcript: &str) -> Result<PredictionResult> {
        let prompt = format_extraction_prompt(transcript);
        self.generate_structured("prediction_result", &prompt).await
    }

    async fn generate_search_terms(&self, application: &str) -> Result<SearchTerms> {
        let prompt = format_search_terms_prompt(application);
        self.generate_structured("search_terms", &prompt).await
    }
}

// Request/Response types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchemaFormat,
}

#[derive(Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}
