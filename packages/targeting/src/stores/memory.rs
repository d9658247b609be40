//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{Result, TargetingError};
use crate::traits::SessionStore;
use crate::types::conversation::ConversationEntry;
use crate::types::results::ChatOutputEntry;

type SessionKey = (Uuid, String, String);
type ResultKey = (Uuid, String);

#[derive(Debug, Clone)]
struct StoredSession {
    entries: Vec<ConversationEntry>,
    created_at: DateTime<Utc>,
}

/// In-memory storage for sessions and result documents.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart.
pub struct MemoryStore {
    sessions: RwLock<HashMap<SessionKey, Vec<StoredSession>>>,
    results: RwLock<HashMap<ResultKey, serde_json::Value>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            results: RwLock::new(HashMap::new()),
        }
    }

    /// Store a session snapshot, timestamped now.
    pub fn insert_session(
        &self,
        session_uuid: Uuid,
        user_id: &str,
        chat_id: &str,
        entries: Vec<ConversationEntry>,
    ) {
        self.insert_session_at(session_uuid, user_id, chat_id, entries, Utc::now());
    }

    /// Store a session snapshot with an explicit creation time.
    pub fn insert_session_at(
        &self,
        session_uuid: Uuid,
        user_id: &str,
        chat_id: &str,
        entries: Vec<ConversationEntry>,
        created_at: DateTime<Utc>,
    ) {
        self.sessions
            .write()
            .unwrap()
            .entry((session_uuid, user_id.to_string(), chat_id.to_string()))
            .or_default()
            .push(StoredSession {
                entries,
                created_at,
            });
    }

    /// Get the stored result document for (session_uuid, user_id), if any.
    pub fn result_document(&self, session_uuid: Uuid, user_id: &str) -> Option<serde_json::Value> {
        self.results
            .read()
            .unwrap()
            .get(&(session_uuid, user_id.to_string()))
            .cloned()
    }

    /// Get the number of stored result documents.
    pub fn result_count(&self) -> usize {
        self.results.read().unwrap().len()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.sessions.write().unwrap().clear();
        self.results.write().unwrap().clear();
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn fetch_latest_session(
        &self,
        session_uuid: Uuid,
        user_id: &str,
        chat_id: &str,
    ) -> Result<Vec<ConversationEntry>> {
        let sessions = self.sessions.read().unwrap();
        Ok(sessions
            .get(&(session_uuid, user_id.to_string(), chat_id.to_string()))
            .and_then(|stored| stored.iter().max_by_key(|s| s.created_at))
            .map(|s| s.entries.clone())
            .unwrap_or_default())
    }

    async fn upsert_chat_output(
        &self,
        session_uuid: Uuid,
        user_id: &str,
        chat_id: &str,
        output: &[ChatOutputEntry],
    ) -> Result<()> {
        let output_value = serde_json::to_value(output)?;

        let mut results = self.results.write().unwrap();
        let doc = results
            .entry((session_uuid, user_id.to_string()))
            .or_insert_with(|| {
                serde_json::json!({
                    "session_uuid": session_uuid,
                    "userId": user_id,
                    "chats": {}
                })
            });

        let chats = doc
            .get_mut("chats")
            .and_then(|v| v.as_object_mut())
            .ok_or_else(|| TargetingError::Storage("result document missing chats object".into()))?;

        let chat_slot = chats
            .entry(chat_id.to_string())
            .or_insert_with(|| serde_json::json!({}));
        match chat_slot.as_object_mut() {
            Some(slot) => {
                slot.insert("output".to_string(), output_value);
            }
            None => *chat_slot = serde_json::json!({ "output": output_value }),
        }

        Ok(())
    }
}
