//! LLM prompts for application extraction and search-term generation.

/// Prompt for predicting business applications from a conversation.
pub const EXTRACTION_PROMPT: &str = r#"You are analyzing a business-discovery chat between an assistant and a user.

Conversation:
{conversation}

Identify the business applications (interest topics) the user wants to pursue.
An application is a short category phrase such as "bakery", "mobile car wash",
or "yoga studio".

Rules:
- Only include applications grounded in what the user actually said
- Use concise lowercase noun phrases
- No duplicates

Output JSON:
{
    "predicted_interests": ["application1", "application2", ...]
}"#;

/// Prompt for generating places-search phrases for one application.
pub const SEARCH_TERMS_PROMPT: &str = r#"Generate search phrases for finding existing local businesses matching this application: {application}

Rules:
- 3 to 5 short phrases someone would type into a maps search box
- Each phrase names the kind of business, optionally with a qualifier
- No explanations

Output JSON:
{
    "search_terms": ["phrase1", "phrase2", ...]
}"#;

/// Format the extraction prompt with a role-tagged transcript.
pub fn format_extraction_prompt(transcript: &str) -> String {
    EXTRACTION_PROMPT.replace("{conversation}", transcript)
}

/// Format the search-term prompt for one application.
pub fn format_search_terms_prompt(application: &str) -> String {
    SEARCH_TERMS_PROMPT.replace("{application}", application)
}
