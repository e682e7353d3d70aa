//! Port abstraction for inventory storage adapters.

use async_trait::async_trait;

use crate::domain::ids::{ApartmentId, ItemId};
use crate::domain::inventory::InventoryItem;

use super::RepositoryError;

/// Storage port for [`InventoryItem`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// All inventory items, in insertion order.
    async fn list(&self) -> Result<Vec<InventoryItem>, RepositoryError>;

    /// Fetch one item by id.
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<InventoryItem>, RepositoryError>;

    /// Items recorded for `apartment_id`. A dangling apartment id yields
    /// an empty list, never an error.
    async fn find_by_apartment(
        &self,
        apartment_id: &ApartmentId,
    ) -> Result<Vec<InventoryItem>, RepositoryError>;

    /// Insert a new item record.
    async fn insert(&self, item: &InventoryItem) -> Result<(), RepositoryError>;

    /// Replace an existing record in full. Returns `false` when no record
    /// with the same id exists.
    async fn replace(&self, item: &InventoryItem) -> Result<bool, RepositoryError>;

    /// Delete by id. Returns `false` when no record matched.
    async fn delete(&self, id: &ItemId) -> Result<bool, RepositoryError>;
}
