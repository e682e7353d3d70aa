//! In-process session store.
//!
//! Stores the serialized user string in a guarded map keyed by
//! [`SESSION_KEY`], round-tripping through JSON exactly like the
//! file-backed adapter so both share parse semantics: a blob that fails to
//! parse reads as "no session".

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::User;

use super::SESSION_KEY;

/// In-memory [`SessionStore`].
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn put(&self, user: &User) -> Result<(), SessionStoreError> {
        let blob = serde_json::to_string(user)
            .map_err(|err| SessionStoreError::serialization(err.to_string()))?;
        self.lock().insert(SESSION_KEY.to_owned(), blob);
        Ok(())
    }

    async fn get(&self) -> Result<Option<User>, SessionStoreError> {
        let Some(blob) = self.lock().get(SESSION_KEY).cloned() else {
            return Ok(None);
        };
        match serde_json::from_str(&blob) {
            Ok(user) => Ok(Some(user)),
            Err(error) => {
                warn!(%error, "stored session failed to parse; treating as no session");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.lock().remove(SESSION_KEY);
        Ok(())
    }
}
