use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Listable;
use crate::session::Role;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
            UserStatus::Suspended => "suspended",
        }
    }
}

/// A row in the admin user-management list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub location: String,
    pub joined: NaiveDate,
    pub projects: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserSort {
    Name,
    Newest,
    Projects,
}

impl Listable for UserRecord {
    type SortKey = UserSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.location.as_str()]
    }

    fn facet(&self, facet: &str) -> Option<&str> {
        match facet {
            "role" => Some(self.role.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn compare(&self, other: &Self, key: UserSort) -> Ordering {
        match key {
            UserSort::Name => self.name.cmp(&other.name),
            UserSort::Newest => other.joined.cmp(&self.joined),
            UserSort::Projects => other.projects.cmp(&self.projects),
        }
    }
}
