use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Listable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Active,
    InReview,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Active => "active",
            ProjectStatus::InReview => "in_review",
            ProjectStatus::Completed => "completed",
        }
    }
}

/// A project posted by the business account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: ProjectStatus,
    pub budget: u32,
    pub applicants: u32,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    Title,
    Deadline,
    Applicants,
    Budget,
}

impl Listable for Project {
    type SortKey = ProjectSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn facet(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn compare(&self, other: &Self, key: ProjectSort) -> Ordering {
        match key {
            ProjectSort::Title => self.title.cmp(&other.title),
            // soonest first
            ProjectSort::Deadline => self.deadline.cmp(&other.deadline),
            ProjectSort::Applicants => other.applicants.cmp(&self.applicants),
            ProjectSort::Budget => other.budget.cmp(&self.budget),
        }
    }
}
