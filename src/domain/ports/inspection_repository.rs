//! Port abstraction for inspection storage adapters.

use async_trait::async_trait;

use crate::domain::ids::{ApartmentId, InspectionId, UserId};
use crate::domain::inspection::Inspection;

use super::RepositoryError;

/// Storage port for [`Inspection`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InspectionRepository: Send + Sync {
    /// All inspections, in insertion order.
    async fn list(&self) -> Result<Vec<Inspection>, RepositoryError>;

    /// Fetch one inspection by id.
    async fn find_by_id(&self, id: &InspectionId) -> Result<Option<Inspection>, RepositoryError>;

    /// Inspections recorded for `apartment_id`. A dangling apartment id
    /// yields an empty list, never an error.
    async fn find_by_apartment(
        &self,
        apartment_id: &ApartmentId,
    ) -> Result<Vec<Inspection>, RepositoryError>;

    /// Inspections taken by `verifier_id`.
    async fn find_by_verifier(
        &self,
        verifier_id: &UserId,
    ) -> Result<Vec<Inspection>, RepositoryError>;

    /// Insert a new inspection record.
    async fn insert(&self, inspection: &Inspection) -> Result<(), RepositoryError>;

    /// Replace an existing record in full. Returns `false` when no record
    /// with the same id exists.
    async fn replace(&self, inspection: &Inspection) -> Result<bool, RepositoryError>;

    /// Delete by id. Returns `false` when no record matched.
    async fn delete(&self, id: &InspectionId) -> Result<bool, RepositoryError>;
}
