use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Listable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Chat list entry. `unread` counts messages not yet read by the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: Uuid,
    pub participants: Vec<String>,
    pub last_message: String,
    pub unread: u32,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn includes(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Order-insensitive participant comparison.
    pub fn has_participants(&self, participants: &[String]) -> bool {
        let mut mine: Vec<&str> = self.participants.iter().map(String::as_str).collect();
        let mut theirs: Vec<&str> = participants.iter().map(String::as_str).collect();
        mine.sort_unstable();
        mine.dedup();
        theirs.sort_unstable();
        theirs.dedup();
        mine == theirs
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ConversationSort {
    Recent,
    Unread,
}

impl Listable for Conversation {
    type SortKey = ConversationSort;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.participants.iter().map(String::as_str).collect();
        fields.push(self.last_message.as_str());
        fields
    }

    fn facet(&self, facet: &str) -> Option<&str> {
        match facet {
            "status" if self.unread > 0 => Some("unread"),
            "status" => Some("read"),
            _ => None,
        }
    }

    fn compare(&self, other: &Self, key: ConversationSort) -> Ordering {
        match key {
            ConversationSort::Recent => other.updated_at.cmp(&self.updated_at),
            ConversationSort::Unread => other.unread.cmp(&self.unread),
        }
    }
}
