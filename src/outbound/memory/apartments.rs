//! In-memory apartment repository.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{ApartmentRepository, RepositoryError};
use crate::domain::{Apartment, ApartmentId, BuildingId};

use super::table::{MemoryTable, Stored};

impl Stored for Apartment {
    fn id_str(&self) -> &str {
        self.id.as_ref()
    }
}

/// Latency-simulating in-memory [`ApartmentRepository`].
pub struct MemoryApartmentRepository {
    table: MemoryTable<Apartment>,
}

impl MemoryApartmentRepository {
    /// Empty repository with the given artificial latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(latency),
        }
    }

    /// Repository pre-populated with `rows`.
    pub fn seeded(rows: Vec<Apartment>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::seeded(rows, latency),
        }
    }
}

#[async_trait]
impl ApartmentRepository for MemoryApartmentRepository {
    async fn list(&self) -> Result<Vec<Apartment>, RepositoryError> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, id: &ApartmentId) -> Result<Option<Apartment>, RepositoryError> {
        Ok(self.table.find(id.as_ref()).await)
    }

    async fn find_by_building(
        &self,
        building_id: &BuildingId,
    ) -> Result<Vec<Apartment>, RepositoryError> {
        Ok(self
            .table
            .filter(|apartment| apartment.building_id == *building_id)
            .await)
    }

    async fn insert(&self, apartment: &Apartment) -> Result<(), RepositoryError> {
        self.table.insert(apartment.clone()).await;
        Ok(())
    }

    async fn replace(&self, apartment: &Apartment) -> Result<bool, RepositoryError> {
        Ok(self.table.replace(apartment.clone()).await)
    }

    async fn delete(&self, id: &ApartmentId) -> Result<bool, RepositoryError> {
        Ok(self.table.delete(id.as_ref()).await)
    }
}
