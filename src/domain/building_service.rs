//! Building CRUD service.
//!
//! The service owns the record lifecycle: it mints ids, stamps timestamps
//! from the injected clock, and applies shallow-merge patches. The
//! repository underneath is plain storage. Lookup misses surface as `None`
//! or `false`, never as errors.

use std::sync::Arc;

use mockable::Clock;

use super::building::{Building, BuildingPatch, NewBuilding};
use super::error::Error;
use super::ids::BuildingId;
use super::ports::{BuildingRepository, RepositoryError};

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(format!("building repository error: {error}"))
}

/// CRUD operations over [`Building`] records.
#[derive(Clone)]
pub struct BuildingService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> BuildingService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

impl<R> BuildingService<R>
where
    R: BuildingRepository,
{
    /// All buildings.
    pub async fn list(&self) -> Result<Vec<Building>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    /// One building, or `None` when the id is unknown.
    pub async fn get(&self, id: &BuildingId) -> Result<Option<Building>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }

    /// Create a building. The stored record is immediately retrievable and
    /// has `created_at == updated_at`.
    pub async fn create(&self, input: NewBuilding) -> Result<Building, Error> {
        let now = self.clock.utc();
        let building = Building {
            id: BuildingId::random(),
            name: input.name,
            address: input.address,
            total_apartments: input.total_apartments,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(&building)
            .await
            .map_err(map_repository_error)?;
        Ok(building)
    }

    /// Merge `patch` into the stored record and bump `updated_at`.
    /// Returns `None` when the id is unknown.
    pub async fn update(
        &self,
        id: &BuildingId,
        patch: BuildingPatch,
    ) -> Result<Option<Building>, Error> {
        let Some(mut building) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        patch.apply_to(&mut building);
        building.updated_at = self.clock.utc();

        // A concurrent delete between the read and the write loses the
        // update; per-call locking only, no cross-call atomicity.
        if self
            .repo
            .replace(&building)
            .await
            .map_err(map_repository_error)?
        {
            Ok(Some(building))
        } else {
            Ok(None)
        }
    }

    /// Delete a building. Returns `false` when the id is unknown. Does not
    /// cascade: apartments keep their dangling `building_id`.
    pub async fn delete(&self, id: &BuildingId) -> Result<bool, Error> {
        self.repo.delete(id).await.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::MockBuildingRepository;
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;

    fn fixed_clock() -> Arc<dyn Clock> {
        let mut clock = MockClock::new();
        let instant = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        clock.expect_utc().return_const(instant);
        Arc::new(clock)
    }

    fn new_building() -> NewBuilding {
        NewBuilding {
            name: "Harbour House".to_owned(),
            address: "1 Quay Street".to_owned(),
            total_apartments: 12,
        }
    }

    #[tokio::test]
    async fn create_stamps_matching_timestamps_and_a_typed_id() {
        let mut repo = MockBuildingRepository::new();
        repo.expect_insert().times(1).returning(|_| Ok(()));

        let service = BuildingService::new(Arc::new(repo), fixed_clock());
        let created = service.create(new_building()).await.expect("create succeeds");

        assert!(created.id.as_ref().starts_with("bld-"));
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.name, "Harbour House");
    }

    #[tokio::test]
    async fn update_on_a_missing_id_returns_none_not_an_error() {
        let mut repo = MockBuildingRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_replace().never();

        let service = BuildingService::new(Arc::new(repo), fixed_clock());
        let updated = service
            .update(&BuildingId::random(), BuildingPatch::default())
            .await
            .expect("update call succeeds");
        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn update_merges_fields_and_bumps_updated_at() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let stored = Building {
            id: BuildingId::random(),
            name: "Old Name".to_owned(),
            address: "1 Quay Street".to_owned(),
            total_apartments: 12,
            created_at,
            updated_at: created_at,
        };
        let stored_for_find = stored.clone();

        let mut repo = MockBuildingRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored_for_find.clone())));
        repo.expect_replace().returning(|_| Ok(true));

        let service = BuildingService::new(Arc::new(repo), fixed_clock());
        let updated = service
            .update(
                &stored.id,
                BuildingPatch {
                    name: Some("New Name".to_owned()),
                    ..BuildingPatch::default()
                },
            )
            .await
            .expect("update call succeeds")
            .expect("record exists");

        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.address, "1 Quay Street");
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at > created_at);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_matched() {
        let mut repo = MockBuildingRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = BuildingService::new(Arc::new(repo), fixed_clock());
        let removed = service
            .delete(&BuildingId::random())
            .await
            .expect("delete call succeeds");
        assert!(!removed);
    }
}
