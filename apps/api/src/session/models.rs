use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Talent,
    Business,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Talent => "talent",
            Role::Business => "business",
            Role::Admin => "admin",
        }
    }
}

/// The signed-in identity. This is also the exact shape written to session storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub avatar: String,
}
