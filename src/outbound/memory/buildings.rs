//! In-memory building repository.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{BuildingRepository, RepositoryError};
use crate::domain::{Building, BuildingId};

use super::table::{MemoryTable, Stored};

impl Stored for Building {
    fn id_str(&self) -> &str {
        self.id.as_ref()
    }
}

/// Latency-simulating in-memory [`BuildingRepository`].
pub struct MemoryBuildingRepository {
    table: MemoryTable<Building>,
}

impl MemoryBuildingRepository {
    /// Empty repository with the given artificial latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(latency),
        }
    }

    /// Repository pre-populated with `rows`.
    pub fn seeded(rows: Vec<Building>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::seeded(rows, latency),
        }
    }
}

#[async_trait]
impl BuildingRepository for MemoryBuildingRepository {
    async fn list(&self) -> Result<Vec<Building>, RepositoryError> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, id: &BuildingId) -> Result<Option<Building>, RepositoryError> {
        Ok(self.table.find(id.as_ref()).await)
    }

    async fn insert(&self, building: &Building) -> Result<(), RepositoryError> {
        self.table.insert(building.clone()).await;
        Ok(())
    }

    async fn replace(&self, building: &Building) -> Result<bool, RepositoryError> {
        Ok(self.table.replace(building.clone()).await)
    }

    async fn delete(&self, id: &BuildingId) -> Result<bool, RepositoryError> {
        Ok(self.table.delete(id.as_ref()).await)
    }
}
