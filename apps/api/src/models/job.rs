use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Listable;

/// A posting on the talent job board. `match_score` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub budget: u32,
    pub skills: Vec<String>,
    pub match_score: u8,
    pub posted: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum JobSort {
    MatchScore,
    Budget,
    Newest,
}

impl Listable for JobPosting {
    type SortKey = JobSort;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![
            self.title.as_str(),
            self.company.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn facet(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            "location" => Some(self.location.as_str()),
            _ => None,
        }
    }

    fn compare(&self, other: &Self, key: JobSort) -> Ordering {
        match key {
            JobSort::MatchScore => other.match_score.cmp(&self.match_score),
            JobSort::Budget => other.budget.cmp(&self.budget),
            JobSort::Newest => other.posted.cmp(&self.posted),
        }
    }
}
