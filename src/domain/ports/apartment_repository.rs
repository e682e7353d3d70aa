//! Port abstraction for apartment storage adapters.

use async_trait::async_trait;

use crate::domain::apartment::Apartment;
use crate::domain::ids::{ApartmentId, BuildingId};

use super::RepositoryError;

/// Storage port for [`Apartment`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApartmentRepository: Send + Sync {
    /// All apartments, in insertion order.
    async fn list(&self) -> Result<Vec<Apartment>, RepositoryError>;

    /// Fetch one apartment by id.
    async fn find_by_id(&self, id: &ApartmentId) -> Result<Option<Apartment>, RepositoryError>;

    /// Apartments belonging to `building_id`. A dangling building id
    /// yields an empty list, never an error.
    async fn find_by_building(
        &self,
        building_id: &BuildingId,
    ) -> Result<Vec<Apartment>, RepositoryError>;

    /// Insert a new apartment record.
    async fn insert(&self, apartment: &Apartment) -> Result<(), RepositoryError>;

    /// Replace an existing record in full. Returns `false` when no record
    /// with the same id exists.
    async fn replace(&self, apartment: &Apartment) -> Result<bool, RepositoryError>;

    /// Delete by id. Returns `false` when no record matched.
    async fn delete(&self, id: &ApartmentId) -> Result<bool, RepositoryError>;
}
