use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::catalog::fixtures;
use crate::errors::AppError;
use crate::models::conversation::{Conversation, ConversationSort, Message};
use crate::query::{filter_sort_search, ListQuery};

const PREVIEW_CHARS: usize = 80;

#[derive(Default)]
struct ChatState {
    /// Insertion order, so unsorted listings are stable.
    order: Vec<Uuid>,
    conversations: HashMap<Uuid, Conversation>,
    messages: HashMap<Uuid, Vec<Message>>,
}

/// In-memory conversations. Nothing here outlives the process.
pub struct ChatService {
    state: RwLock<ChatState>,
}

impl ChatService {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(ChatState::default()),
        }
    }

    pub fn seeded() -> Self {
        let mut state = ChatState::default();
        for (conversation, messages) in fixtures::conversations(Utc::now()) {
            state.order.push(conversation.id);
            state.messages.insert(conversation.id, messages);
            state.conversations.insert(conversation.id, conversation);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Conversations the viewer takes part in, filtered and sorted by `query`.
    pub async fn list(&self, viewer: &str, query: &ListQuery<ConversationSort>) -> Vec<Conversation> {
        let state = self.state.read().await;
        let visible: Vec<Conversation> = state
            .order
            .iter()
            .filter_map(|id| state.conversations.get(id))
            .filter(|c| c.includes(viewer))
            .cloned()
            .collect();
        filter_sort_search(&visible, query)
    }

    /// Returns the conversation with exactly these participants, creating it if needed.
    pub async fn open(&self, participants: Vec<String>) -> Result<Conversation, AppError> {
        let participants: Vec<String> = participants
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if participants.is_empty() {
            return Err(AppError::Validation(
                "A conversation needs at least one participant".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        if let Some(existing) = state
            .conversations
            .values()
            .find(|c| c.has_participants(&participants))
        {
            return Ok(existing.clone());
        }

        let conversation = Conversation {
            id: Uuid::new_v4(),
            participants,
            last_message: String::new(),
            unread: 0,
            updated_at: Utc::now(),
        };
        state.order.push(conversation.id);
        state.messages.insert(conversation.id, Vec::new());
        state
            .conversations
            .insert(conversation.id, conversation.clone());

        info!("Opened conversation {} with {:?}", conversation.id, conversation.participants);
        Ok(conversation)
    }

    pub async fn unread_total(&self, viewer: &str) -> u32 {
        let state = self.state.read().await;
        state
            .conversations
            .values()
            .filter(|c| c.includes(viewer))
            .map(|c| c.unread)
            .sum()
    }

    pub async fn messages(&self, viewer: &str, id: Uuid) -> Result<Vec<Message>, AppError> {
        let state = self.state.read().await;
        visible(&state.conversations, viewer, id)?;
        Ok(state.messages.get(&id).cloned().unwrap_or_default())
    }

    /// Appends a message from the viewer. It starts read, so the unread count
    /// is unchanged; the preview and timestamp follow the new message.
    pub async fn send(&self, viewer: &str, id: Uuid, text: &str) -> Result<Message, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Message text cannot be empty".to_string()));
        }

        let mut state = self.state.write().await;
        let state = &mut *state;
        let conversation = visible_mut(&mut state.conversations, viewer, id)?;

        let message = Message {
            id: Uuid::new_v4(),
            conversation_id: id,
            sender: viewer.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
            read: true,
        };

        conversation.last_message = preview(text);
        conversation.updated_at = message.timestamp;
        state.messages.entry(id).or_default().push(message.clone());

        Ok(message)
    }

    /// Marks every message read and zeroes the unread count.
    pub async fn mark_read(&self, viewer: &str, id: Uuid) -> Result<Conversation, AppError> {
        let mut state = self.state.write().await;
        let state = &mut *state;
        let conversation = visible_mut(&mut state.conversations, viewer, id)?;

        if let Some(messages) = state.messages.get_mut(&id) {
            messages.iter_mut().for_each(|m| m.read = true);
        }
        conversation.unread = 0;
        Ok(conversation.clone())
    }
}

// Threads the viewer is not part of report the same NotFound as unknown ids.
fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Conversation {id} not found"))
}

fn visible<'a>(
    conversations: &'a HashMap<Uuid, Conversation>,
    viewer: &str,
    id: Uuid,
) -> Result<&'a Conversation, AppError> {
    conversations
        .get(&id)
        .filter(|c| c.includes(viewer))
        .ok_or_else(|| not_found(id))
}

fn visible_mut<'a>(
    conversations: &'a mut HashMap<Uuid, Conversation>,
    viewer: &str,
    id: Uuid,
) -> Result<&'a mut Conversation, AppError> {
    conversations
        .get_mut(&id)
        .filter(|c| c.includes(viewer))
        .ok_or_else(|| not_found(id))
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{truncated}…")
}
