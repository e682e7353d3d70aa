//! Port abstraction for building storage adapters.

use async_trait::async_trait;

use crate::domain::building::Building;
use crate::domain::ids::BuildingId;

use super::RepositoryError;

/// Storage port for [`Building`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// All buildings, in insertion order.
    async fn list(&self) -> Result<Vec<Building>, RepositoryError>;

    /// Fetch one building by id.
    async fn find_by_id(&self, id: &BuildingId) -> Result<Option<Building>, RepositoryError>;

    /// Insert a new building record.
    async fn insert(&self, building: &Building) -> Result<(), RepositoryError>;

    /// Replace an existing record in full. Returns `false` when no record
    /// with the same id exists.
    async fn replace(&self, building: &Building) -> Result<bool, RepositoryError>;

    /// Delete by id. Returns `false` when no record matched.
    async fn delete(&self, id: &BuildingId) -> Result<bool, RepositoryError>;
}
