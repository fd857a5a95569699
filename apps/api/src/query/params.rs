use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;
use crate::query::engine::{ListQuery, Selection};

/// Builds a `ListQuery` from raw query-string params.
///
/// `q` is the free-text query, `sort` names a sort key (deserialized from its
/// snake_case name), and each entry of `facets` is read as a categorical filter.
/// Params outside that set are ignored.
pub fn list_query_from_params<K: DeserializeOwned>(
    params: &HashMap<String, String>,
    facets: &[&str],
) -> Result<ListQuery<K>, AppError> {
    let mut query = ListQuery::default();

    if let Some(text) = params.get("q") {
        query = query.text(text.as_str());
    }

    for facet in facets {
        let selection = Selection::parse(params.get(*facet).map(String::as_str));
        query = query.filter(*facet, selection);
    }

    if let Some(raw) = params.get("sort").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let key = serde_json::from_value::<K>(serde_json::Value::String(raw.to_string()))
            .map_err(|_| AppError::Validation(format!("Unknown sort key '{raw}'")))?;
        query = query.sort(key);
    }

    Ok(query)
}

/// List payload. `empty` lets the client render its "no results" state.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
    pub empty: bool,
}

impl<T: Serialize> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            total,
            empty: total == 0,
        }
    }
}
