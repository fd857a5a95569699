//! Generic filter → search → sort over an in-memory collection.
//!
//! Every list view (users, jobs, projects, talent, favorites, conversations)
//! goes through `filter_sort_search`; record types describe themselves via
//! `Listable`.
//!
//! Semantics:
//! - text: case-insensitive substring, OR across the record's search fields;
//!   an empty (or whitespace-only) query matches everything
//! - facets: exact equality per filter, `all` passes everything; filters AND together
//! - sort: one comparator per sort key; `sort_by` is stable, so ties keep
//!   their collection order

use std::cmp::Ordering;

use tracing::debug;

/// Sentinel selection meaning "no filter on this facet".
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Exact(String),
}

impl Selection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Selection::All,
            Some(value) if value.eq_ignore_ascii_case(ALL) => Selection::All,
            Some(value) => Selection::Exact(value.to_string()),
        }
    }

    /// `value` is `None` when the record has no such facet; that never matches an exact selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    pub facet: String,
    pub selection: Selection,
}

impl FacetFilter {
    pub fn new(facet: impl Into<String>, selection: Selection) -> Self {
        Self {
            facet: facet.into(),
            selection,
        }
    }
}

/// A record that can appear in a list view.
pub trait Listable {
    type SortKey: Copy;

    /// Fields inspected by free-text search (name, title, description, each skill...).
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical facet, or `None` if this record type has no such facet.
    fn facet(&self, facet: &str) -> Option<&str>;

    fn compare(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

#[derive(Debug, Clone)]
pub struct ListQuery<K> {
    pub text: String,
    pub filters: Vec<FacetFilter>,
    pub sort: Option<K>,
}

impl<K> Default for ListQuery<K> {
    fn default() -> Self {
        Self {
            text: String::new(),
            filters: Vec::new(),
            sort: None,
        }
    }
}

impl<K> ListQuery<K> {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn filter(mut self, facet: impl Into<String>, selection: Selection) -> Self {
        self.filters.push(FacetFilter::new(facet, selection));
        self
    }

    pub fn sort(mut self, key: K) -> Self {
        self.sort = Some(key);
        self
    }
}

pub fn matches_text<T: Listable>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn matches_filters<T: Listable>(record: &T, filters: &[FacetFilter]) -> bool {
    filters
        .iter()
        .all(|f| f.selection.matches(record.facet(&f.facet)))
}

pub fn filter_sort_search<T>(collection: &[T], query: &ListQuery<T::SortKey>) -> Vec<T>
where
    T: Listable + Clone,
{
    let needle = query.text.trim().to_lowercase();

    let mut results: Vec<T> = collection
        .iter()
        .filter(|record| matches_filters(*record, &query.filters))
        .filter(|record| matches_text(*record, &needle))
        .cloned()
        .collect();

    if let Some(key) = query.sort {
        results.sort_by(|a, b| a.compare(b, key));
    }

    debug!(
        "List query '{}' with {} filters: {} of {} records",
        needle,
        query.filters.len(),
        results.len(),
        collection.len()
    );
    results
}
