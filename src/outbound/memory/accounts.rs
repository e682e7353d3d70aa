//! In-memory user account repository.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{AccountRepository, RepositoryError};
use crate::domain::{UserAccount, UserId};

use super::table::{MemoryTable, Stored};

impl Stored for UserAccount {
    fn id_str(&self) -> &str {
        self.id.as_ref()
    }
}

/// Latency-simulating in-memory [`AccountRepository`].
pub struct MemoryAccountRepository {
    table: MemoryTable<UserAccount>,
}

impl MemoryAccountRepository {
    /// Empty repository with the given artificial latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(latency),
        }
    }

    /// Repository pre-populated with `rows`.
    pub fn seeded(rows: Vec<UserAccount>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::seeded(rows, latency),
        }
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn list(&self) -> Result<Vec<UserAccount>, RepositoryError> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, RepositoryError> {
        Ok(self.table.find(id.as_ref()).await)
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserAccount>, RepositoryError> {
        Ok(self
            .table
            .filter(|account| account.matches_identifier(identifier))
            .await
            .into_iter()
            .next())
    }

    async fn insert(&self, account: &UserAccount) -> Result<(), RepositoryError> {
        self.table.insert(account.clone()).await;
        Ok(())
    }

    async fn replace(&self, account: &UserAccount) -> Result<bool, RepositoryError> {
        Ok(self.table.replace(account.clone()).await)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.table.delete(id.as_ref()).await)
    }
}
