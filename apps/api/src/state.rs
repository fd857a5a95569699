use std::sync::Arc;

use crate::catalog::{Catalog, ScoreJitter};
use crate::chat::ChatService;
use crate::config::{Config, SessionBackend};
use crate::session::storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
use crate::session::SessionStore;
use crate::simulation::Simulator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one identity store for this browser context.
    pub session: Arc<SessionStore>,
    pub catalog: Arc<Catalog>,
    pub chat: Arc<ChatService>,
    pub simulator: Simulator,
    pub jitter: ScoreJitter,
}

impl AppState {
    pub fn new(config: &Config, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            session: Arc::new(SessionStore::new(storage)),
            catalog: Arc::new(Catalog::seeded()),
            chat: Arc::new(ChatService::seeded()),
            simulator: Simulator::new(config.simulated_latency),
            jitter: ScoreJitter::new(config.match_score_jitter),
        }
    }
}

/// Picks the session storage backend named by the config.
pub fn build_session_storage(backend: &SessionBackend) -> Arc<dyn SessionStorage> {
    match backend {
        SessionBackend::Memory => Arc::new(MemorySessionStorage::new()),
        SessionBackend::File(path) => Arc::new(FileSessionStorage::new(path.clone())),
    }
}
