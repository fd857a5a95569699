// Session store: demo-account login, logout and rehydration from persisted storage.
// The store is carried in AppState; storage is pluggable via the SessionStorage trait.

pub mod credentials;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;

pub use models::Role;
pub use store::SessionStore;
