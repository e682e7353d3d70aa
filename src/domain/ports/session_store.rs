//! Port abstraction for session persistence.
//!
//! The session is one serialized [`User`] under one fixed key, matching
//! the reference system's single browser-storage entry. Credentials never
//! reach the store because the auth service strips them first.

use async_trait::async_trait;

use crate::domain::user::User;

/// Errors raised by session store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// The backing storage could not be read or written.
    #[error("session store backend failed: {message}")]
    Backend {
        /// Adapter-provided failure description.
        message: String,
    },
    /// The outgoing user could not be serialized.
    #[error("session serialization failed: {message}")]
    Serialization {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl SessionStoreError {
    /// Helper for backend-level failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Helper for encode failures.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Storage port for the current-user session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist `user` as the current session.
    async fn put(&self, user: &User) -> Result<(), SessionStoreError>;

    /// Read back the current session.
    ///
    /// A stored blob that fails to parse reads as `Ok(None)` — a corrupt
    /// session means "not logged in", not a fault.
    async fn get(&self) -> Result<Option<User>, SessionStoreError>;

    /// Drop the current session, if any.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
