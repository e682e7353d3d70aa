//! In-memory inventory repository.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{InventoryRepository, RepositoryError};
use crate::domain::{ApartmentId, InventoryItem, ItemId};

use super::table::{MemoryTable, Stored};

impl Stored for InventoryItem {
    fn id_str(&self) -> &str {
        self.id.as_ref()
    }
}

/// Latency-simulating in-memory [`InventoryRepository`].
pub struct MemoryInventoryRepository {
    table: MemoryTable<InventoryItem>,
}

impl MemoryInventoryRepository {
    /// Empty repository with the given artificial latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(latency),
        }
    }

    /// Repository pre-populated with `rows`.
    pub fn seeded(rows: Vec<InventoryItem>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::seeded(rows, latency),
        }
    }
}

#[async_trait]
impl InventoryRepository for MemoryInventoryRepository {
    async fn list(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<InventoryItem>, RepositoryError> {
        Ok(self.table.find(id.as_ref()).await)
    }

    async fn find_by_apartment(
        &self,
        apartment_id: &ApartmentId,
    ) -> Result<Vec<InventoryItem>, RepositoryError> {
        Ok(self
            .table
            .filter(|item| item.apartment_id == *apartment_id)
            .await)
    }

    async fn insert(&self, item: &InventoryItem) -> Result<(), RepositoryError> {
        self.table.insert(item.clone()).await;
        Ok(())
    }

    async fn replace(&self, item: &InventoryItem) -> Result<bool, RepositoryError> {
        Ok(self.table.replace(item.clone()).await)
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, RepositoryError> {
        Ok(self.table.delete(id.as_ref()).await)
    }
}
