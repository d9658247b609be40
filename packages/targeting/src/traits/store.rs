//! Session store trait: conversation reads and per-chat output upserts.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::types::conversation::ConversationEntry;
use crate::types::results::ChatOutputEntry;

/// Document-store boundary for chat sessions and pipeline outputs.
///
/// A session is addressed by (session_uuid, user_id, chat_id); a result
/// document by (session_uuid, user_id), with one slot per chat inside it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the most recent stored session for the address.
    ///
    /// Returns an empty Vec when no matching session exists; callers treat
    /// that as "nothing to process", not as an error.
    async fn fetch_latest_session(
        &self,
        session_uuid: Uuid,
        user_id: &str,
        chat_id: &str,
    ) -> Result<Vec<ConversationEntry>>;

    /// Upsert the reshaped output under `chats.<chat_id>.output` of the
    /// result document for (session_uuid, user_id).
    ///
    /// Creates the document when absent. Only the targeted chat field is
    /// replaced; sibling chats and sibling fields survive.
    async fn upsert_chat_output(
        &self,
        session_uuid: Uuid,
        user_id: &str,
        chat_id: &str,
        output: &[ChatOutputEntry],
    ) -> Result<()>;
}
