use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Listable;

/// Talent saved by the business account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub id: Uuid,
    pub talent_id: Uuid,
    pub name: String,
    pub title: String,
    pub category: String,
    pub note: String,
    pub match_score: u8,
    pub saved: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteSort {
    MatchScore,
    Name,
    Recent,
}

impl Listable for Favorite {
    type SortKey = FavoriteSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.title.as_str(), self.note.as_str()]
    }

    fn facet(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn compare(&self, other: &Self, key: FavoriteSort) -> Ordering {
        match key {
            FavoriteSort::MatchScore => other.match_score.cmp(&self.match_score),
            FavoriteSort::Name => self.name.cmp(&other.name),
            FavoriteSort::Recent => other.saved.cmp(&self.saved),
        }
    }
}
