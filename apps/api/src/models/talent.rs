use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Listable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Unavailable => "unavailable",
        }
    }
}

/// A talent card in the business search view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TalentProfile {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub category: String,
    pub location: String,
    pub skills: Vec<String>,
    pub rating: f32,
    pub hourly_rate: u32,
    pub availability: Availability,
    pub match_score: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TalentSort {
    MatchScore,
    Rating,
    HourlyRate,
    Name,
}

impl Listable for TalentProfile {
    type SortKey = TalentSort;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![
            self.name.as_str(),
            self.title.as_str(),
            self.bio.as_str(),
        ];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn facet(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            "location" => Some(self.location.as_str()),
            "availability" => Some(self.availability.as_str()),
            _ => None,
        }
    }

    fn compare(&self, other: &Self, key: TalentSort) -> Ordering {
        match key {
            TalentSort::MatchScore => other.match_score.cmp(&self.match_score),
            TalentSort::Rating => other.rating.total_cmp(&self.rating),
            TalentSort::HourlyRate => other.hourly_rate.cmp(&self.hourly_rate),
            TalentSort::Name => self.name.cmp(&other.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::query::{filter_sort_search, ListQuery};

    fn names(sort: TalentSort) -> Vec<String> {
        filter_sort_search(&fixtures::talent(), &ListQuery::default().sort(sort))
            .into_iter()
            .map(|t| t.name)
            .collect()
    }

    #[test]
    fn test_rating_sorts_highest_first() {
        assert_eq!(
            names(TalentSort::Rating),
            vec!["Emma Rodriguez", "Olivia Brown", "Marcus Chen", "Aisha Patel", "Leo Martins"]
        );
    }

    #[test]
    fn test_hourly_rate_sorts_highest_first() {
        assert_eq!(
            names(TalentSort::HourlyRate),
            vec!["Olivia Brown", "Emma Rodriguez", "Marcus Chen", "Aisha Patel", "Leo Martins"]
        );
    }

    #[test]
    fn test_name_sorts_alphabetically() {
        assert_eq!(
            names(TalentSort::Name),
            vec!["Aisha Patel", "Emma Rodriguez", "Leo Martins", "Marcus Chen", "Olivia Brown"]
        );
    }

    #[test]
    fn test_match_score_ties_keep_seed_order() {
        assert_eq!(
            names(TalentSort::MatchScore),
            vec!["Emma Rodriguez", "Marcus Chen", "Olivia Brown", "Leo Martins", "Aisha Patel"]
        );
    }

    #[test]
    fn test_availability_facet() {
        let query = ListQuery::<TalentSort>::default().filter(
            "availability",
            crate::query::engine::Selection::Exact("busy".to_string()),
        );
        let busy = filter_sort_search(&fixtures::talent(), &query);
        assert_eq!(busy.len(), 1);
        assert_eq!(busy[0].name, "Marcus Chen");
    }
}
