//! Question filtering and history shaping for the business-discovery chat.
//!
//! The chat front end generates one question per turn. Before a question is
//! shown it runs through two gates: a forbidden-phrase check (topics the
//! product never asks about) and a fuzzy duplicate check against questions
//! already asked in the session. The history helpers reshape stored Q/A
//! exchanges into the role-tagged message list an LLM chat API expects.

use serde::{Deserialize, Serialize};

/// Phrases the question generator must never ask about. Matching is
/// case-insensitive substring containment.
pub const FORBIDDEN_PHRASES: &[&str] = &[
    "expected demand",
    "future demand",
    "market forecast",
    "how much future demand",
    "how much demand",
    "estimate future sales",
    "foresee any increase in demand",
    "market size",
    "current market size",
    "future market size",
];

/// Similarity score (0-100 scale) at or above which two questions count as
/// duplicates.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 80.0;

/// Speaker tag on a stored exchange or an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One stored question/answer exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaItem {
    pub role: Role,
    pub question: String,
    pub answer: String,
}

impl QaItem {
    pub fn new(role: Role, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            role,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A role-tagged message in LLM chat format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Whether a candidate question touches a forbidden phrase.
pub fn is_forbidden(question: &str) -> bool {
    let lowered = question.to_lowercase();
    FORBIDDEN_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

/// Whether a candidate question duplicates one already asked, at the
/// default threshold.
pub fn is_duplicate(question: &str, qa_items: &[QaItem]) -> bool {
    is_duplicate_with_threshold(question, qa_items, DEFAULT_DUPLICATE_THRESHOLD)
}

/// Whether a candidate question duplicates one already asked.
///
/// Only assistant entries are compared; both sides are lowercased before
/// scoring. A similarity at or above `threshold` is a duplicate.
pub fn is_duplicate_with_threshold(question: &str, qa_items: &[QaItem], threshold: f64) -> bool {
    let candidate = question.to_lowercase();
    qa_items
        .iter()
        .filter(|item| item.role == Role::Assistant)
        .any(|item| similarity_ratio(&item.question.to_lowercase(), &candidate) >= threshold)
}

/// Edit-distance similarity between two strings on a 0-100 scale.
fn similarity_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Reshape stored exchanges into role-tagged chat messages: assistant
/// entries contribute the question they asked, user entries the answer
/// they gave.
pub fn chat_messages(qa_items: &[QaItem]) -> Vec<ChatMessage> {
    qa_items
        .iter()
        .map(|item| match item.role {
            Role::Assistant => ChatMessage {
                role: Role::Assistant,
                content: item.question.clone(),
            },
            Role::User => ChatMessage {
                role: Role::User,
                content: item.answer.clone(),
            },
        })
        .collect()
}

/// History passed to the LLM before generating the next question.
/// Currently the full exchange list; a windowed variant would slot in here.
pub fn qa_history_for_llm(chat: &[QaItem]) -> Vec<ChatMessage> {
    chat_messages(chat)
}
