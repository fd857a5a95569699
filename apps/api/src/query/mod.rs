// List query engine shared by every list view: free-text search, facet filters, sort.

pub mod engine;
pub mod params;

pub use engine::{filter_sort_search, Listable, ListQuery};
pub use params::{list_query_from_params, ListResponse};
