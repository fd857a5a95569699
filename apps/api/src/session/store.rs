use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::session::credentials::{find_by_credentials, find_by_id};
use crate::session::models::{Role, Session};
use crate::session::storage::SessionStorage;

/// Storage key holding the serialized session record.
pub const SESSION_KEY: &str = "krystal_session";

/// The one shared identity store. Every mutation takes the write lock for its
/// whole duration, so login/logout/restore never interleave.
///
/// States: anonymous --login ok--> authenticated --logout--> anonymous.
/// A failed login leaves the current state untouched.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
        }
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let mut current = self.current.write().await;

        let Some(record) = find_by_credentials(email, password) else {
            warn!("Rejected login for {email}");
            return Err(AppError::InvalidCredentials);
        };

        let session = record.to_session();
        let serialized = serde_json::to_string(&session).map_err(anyhow::Error::from)?;
        self.storage.set(SESSION_KEY, serialized).await?;
        *current = Some(session.clone());

        info!("Signed in {} as {}", session.email, session.role.as_str());
        Ok(session)
    }

    /// Clears memory unconditionally. A storage failure is logged, not returned.
    pub async fn logout(&self) {
        let mut current = self.current.write().await;
        if let Some(session) = current.take() {
            info!("Signed out {}", session.email);
        }
        if let Err(e) = self.storage.remove(SESSION_KEY).await {
            warn!("Failed to clear persisted session: {e}");
        }
    }

    /// Rehydrates from storage. The persisted record is trusted as-is as long as
    /// its id names a demo account; anything unreadable leaves the store empty.
    pub async fn restore_session(&self) -> Option<Session> {
        let mut current = self.current.write().await;

        let raw = match self.storage.get(SESSION_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                *current = None;
                return None;
            }
            Err(e) => {
                warn!("Could not read persisted session: {e}");
                *current = None;
                return None;
            }
        };

        let restored = match serde_json::from_str::<Session>(&raw) {
            Ok(session) if find_by_id(session.id).is_some() => Some(session),
            Ok(session) => {
                warn!("Persisted session names unknown account {}", session.id);
                None
            }
            Err(e) => {
                warn!("Persisted session is malformed: {e}");
                None
            }
        };

        if let Some(session) = &restored {
            info!("Restored session for {}", session.email);
        }
        *current = restored.clone();
        restored
    }

    pub async fn require_session(&self) -> Result<Session, AppError> {
        self.current().await.ok_or(AppError::Unauthorized)
    }

    pub async fn require_role(&self, role: Role) -> Result<Session, AppError> {
        let session = self.require_session().await?;
        if session.role != role {
            return Err(AppError::Forbidden);
        }
        Ok(session)
    }
}
