//! In-memory inspection repository.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{InspectionRepository, RepositoryError};
use crate::domain::{ApartmentId, Inspection, InspectionId, UserId};

use super::table::{MemoryTable, Stored};

impl Stored for Inspection {
    fn id_str(&self) -> &str {
        self.id.as_ref()
    }
}

/// Latency-simulating in-memory [`InspectionRepository`].
pub struct MemoryInspectionRepository {
    table: MemoryTable<Inspection>,
}

impl MemoryInspectionRepository {
    /// Empty repository with the given artificial latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(latency),
        }
    }

    /// Repository pre-populated with `rows`.
    pub fn seeded(rows: Vec<Inspection>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::seeded(rows, latency),
        }
    }
}

#[async_trait]
impl InspectionRepository for MemoryInspectionRepository {
    async fn list(&self) -> Result<Vec<Inspection>, RepositoryError> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(
        &self,
        id: &InspectionId,
    ) -> Result<Option<Inspection>, RepositoryError> {
        Ok(self.table.find(id.as_ref()).await)
    }

    async fn find_by_apartment(
        &self,
        apartment_id: &ApartmentId,
    ) -> Result<Vec<Inspection>, RepositoryError> {
        Ok(self
            .table
            .filter(|inspection| inspection.apartment_id == *apartment_id)
            .await)
    }

    async fn find_by_verifier(
        &self,
        verifier_id: &UserId,
    ) -> Result<Vec<Inspection>, RepositoryError> {
        Ok(self
            .table
            .filter(|inspection| inspection.verifier_id == *verifier_id)
            .await)
    }

    async fn insert(&self, inspection: &Inspection) -> Result<(), RepositoryError> {
        self.table.insert(inspection.clone()).await;
        Ok(())
    }

    async fn replace(&self, inspection: &Inspection) -> Result<bool, RepositoryError> {
        Ok(self.table.replace(inspection.clone()).await)
    }

    async fn delete(&self, id: &InspectionId) -> Result<bool, RepositoryError> {
        Ok(self.table.delete(id.as_ref()).await)
    }
}
