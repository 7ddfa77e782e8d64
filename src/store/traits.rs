//! Backend-agnostic session store trait.
//!
//! A keyed repository: one [`Session`] record per phone number, written as
//! a whole-record upsert. No partial write is ever considered committed —
//! a failed `save` leaves the previous record intact and is surfaced to
//! the caller as a retryable [`StoreError`].
//!
//! Sessions have no expiry. An idle, never-completed session is a normal
//! resting state; the only way a session ends is an explicit `delete`.

use async_trait::async_trait;

use crate::dialog::Session;
use crate::error::StoreError;

/// Async keyed access to per-phone session records.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for a phone number, if one exists.
    async fn load(&self, phone: &str) -> Result<Option<Session>, StoreError>;

    /// Upsert the whole session record for a phone number.
    async fn save(&self, phone: &str, session: &Session) -> Result<(), StoreError>;

    /// Delete the session for a phone number (explicit reset). Deleting a
    /// phone with no session is a no-op.
    async fn delete(&self, phone: &str) -> Result<(), StoreError>;
}
