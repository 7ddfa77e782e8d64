//! In-memory session store — the default backend and the test workhorse.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::dialog::Session;
use crate::error::StoreError;
use crate::store::traits::SessionStore;

/// Map-backed store. Cheap to clone via `Arc`; turn-level atomicity per
/// phone number is enforced by the dialog manager's per-key lock, not here.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions (for tests and status reporting).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, phone: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.read().await.get(phone).cloned())
    }

    async fn save(&self, phone: &str, session: &Session) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(phone.to_string(), session.clone());
        Ok(())
    }

    async fn delete(&self, phone: &str) -> Result<(), StoreError> {
        self.sessions.write().await.remove(phone);
        Ok(())
    }
}
