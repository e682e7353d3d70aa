//! Inspection CRUD service and lifecycle operations.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use super::access::AccessMode;
use super::error::Error;
use super::ids::{ApartmentId, InspectionId, UserId};
use super::inspection::{
    Inspection, InspectionItem, InspectionPatch, InspectionStatus, NewInspection,
};
use super::ports::{ApartmentAccess, InspectionRepository, RepositoryError};
use super::user::User;

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(format!("inspection repository error: {error}"))
}

/// CRUD and lifecycle operations over [`Inspection`] records.
#[derive(Clone)]
pub struct InspectionService<R> {
    repo: Arc<R>,
    access: Arc<dyn ApartmentAccess>,
    mode: AccessMode,
    clock: Arc<dyn Clock>,
}

impl<R> InspectionService<R> {
    /// Create a new service over the given repository.
    pub fn new(
        repo: Arc<R>,
        access: Arc<dyn ApartmentAccess>,
        mode: AccessMode,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            access,
            mode,
            clock,
        }
    }
}

impl<R> InspectionService<R>
where
    R: InspectionRepository,
{
    /// All inspections.
    pub async fn list(&self) -> Result<Vec<Inspection>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    /// One inspection, or `None` when the id is unknown.
    pub async fn get(&self, id: &InspectionId) -> Result<Option<Inspection>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }

    /// Inspections recorded for one apartment, on behalf of `requester`.
    /// Gated the same way as scoped inventory lookups; see
    /// [`AccessMode`].
    pub async fn list_for_apartment(
        &self,
        requester: &User,
        apartment_id: &ApartmentId,
    ) -> Result<Vec<Inspection>, Error> {
        if self.mode == AccessMode::Strict
            && !self.access.may_view(requester, apartment_id).await?
        {
            debug!(user = %requester.id, apartment = %apartment_id, "scoped inspection lookup denied");
            return Ok(Vec::new());
        }
        self.repo
            .find_by_apartment(apartment_id)
            .await
            .map_err(map_repository_error)
    }

    /// Inspections taken by one verifier.
    pub async fn list_for_verifier(
        &self,
        verifier_id: &UserId,
    ) -> Result<Vec<Inspection>, Error> {
        self.repo
            .find_by_verifier(verifier_id)
            .await
            .map_err(map_repository_error)
    }

    /// Open an inspection in `Pending` state with
    /// `created_at == updated_at`.
    pub async fn create(&self, input: NewInspection) -> Result<Inspection, Error> {
        let now = self.clock.utc();
        let inspection = Inspection {
            id: InspectionId::random(),
            apartment_id: input.apartment_id,
            verifier_id: input.verifier_id,
            status: InspectionStatus::Pending,
            items: input.items,
            general_notes: input.general_notes,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(&inspection)
            .await
            .map_err(map_repository_error)?;
        Ok(inspection)
    }

    /// Merge `patch` into the stored record and bump `updated_at`.
    /// Returns `None` when the id is unknown.
    pub async fn update(
        &self,
        id: &InspectionId,
        patch: InspectionPatch,
    ) -> Result<Option<Inspection>, Error> {
        let Some(mut inspection) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        patch.apply_to(&mut inspection);
        inspection.updated_at = self.clock.utc();

        if self
            .repo
            .replace(&inspection)
            .await
            .map_err(map_repository_error)?
        {
            Ok(Some(inspection))
        } else {
            Ok(None)
        }
    }

    /// Record final findings and move the inspection to `Completed`,
    /// stamping `completed_at`. Returns `None` when the id is unknown; an
    /// inspection already in a terminal state is returned unchanged.
    pub async fn complete(
        &self,
        id: &InspectionId,
        items: Vec<InspectionItem>,
        general_notes: Option<String>,
    ) -> Result<Option<Inspection>, Error> {
        let Some(mut inspection) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        if inspection.status.is_terminal() {
            return Ok(Some(inspection));
        }

        let now = self.clock.utc();
        inspection.status = InspectionStatus::Completed;
        inspection.items = items;
        inspection.general_notes = general_notes;
        inspection.completed_at = Some(now);
        inspection.updated_at = now;

        if self
            .repo
            .replace(&inspection)
            .await
            .map_err(map_repository_error)?
        {
            Ok(Some(inspection))
        } else {
            Ok(None)
        }
    }

    /// Abandon a pending inspection. Returns `None` when the id is
    /// unknown; an inspection already in a terminal state is returned
    /// unchanged.
    pub async fn cancel(&self, id: &InspectionId) -> Result<Option<Inspection>, Error> {
        let Some(mut inspection) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        if inspection.status.is_terminal() {
            return Ok(Some(inspection));
        }

        inspection.status = InspectionStatus::Cancelled;
        inspection.updated_at = self.clock.utc();

        if self
            .repo
            .replace(&inspection)
            .await
            .map_err(map_repository_error)?
        {
            Ok(Some(inspection))
        } else {
            Ok(None)
        }
    }

    /// Delete an inspection. Returns `false` when the id is unknown.
    pub async fn delete(&self, id: &InspectionId) -> Result<bool, Error> {
        self.repo.delete(id).await.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::inspection::CheckResult;
    use crate::domain::ids::ItemId;
    use crate::domain::ports::{MockApartmentAccess, MockInspectionRepository};
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;

    fn fixed_clock() -> Arc<dyn Clock> {
        let mut clock = MockClock::new();
        let instant = Utc.with_ymd_and_hms(2026, 4, 2, 14, 0, 0).unwrap();
        clock.expect_utc().return_const(instant);
        Arc::new(clock)
    }

    fn pending_inspection() -> Inspection {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 10, 0, 0).unwrap();
        Inspection {
            id: InspectionId::random(),
            apartment_id: ApartmentId::random(),
            verifier_id: UserId::random(),
            status: InspectionStatus::Pending,
            items: Vec::new(),
            general_notes: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(
        repo: MockInspectionRepository,
    ) -> InspectionService<MockInspectionRepository> {
        InspectionService::new(
            Arc::new(repo),
            Arc::new(MockApartmentAccess::new()),
            AccessMode::Compat,
            fixed_clock(),
        )
    }

    #[tokio::test]
    async fn completing_a_pending_inspection_stamps_completed_at() {
        let stored = pending_inspection();
        let stored_for_find = stored.clone();

        let mut repo = MockInspectionRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored_for_find.clone())));
        repo.expect_replace().returning(|_| Ok(true));

        let findings = vec![InspectionItem {
            inventory_item_id: ItemId::random(),
            status: CheckResult::Issue,
            notes: Some("scratched".to_owned()),
        }];
        let completed = service(repo)
            .complete(&stored.id, findings.clone(), Some("all checked".to_owned()))
            .await
            .expect("call succeeds")
            .expect("record exists");

        assert_eq!(completed.status, InspectionStatus::Completed);
        assert_eq!(completed.items, findings);
        assert_eq!(completed.completed_at, Some(completed.updated_at));
        assert!(completed.updated_at > stored.updated_at);
    }

    #[tokio::test]
    async fn completing_a_cancelled_inspection_is_a_no_op() {
        let mut stored = pending_inspection();
        stored.status = InspectionStatus::Cancelled;
        let stored_for_find = stored.clone();

        let mut repo = MockInspectionRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored_for_find.clone())));
        repo.expect_replace().never();

        let result = service(repo)
            .complete(&stored.id, Vec::new(), None)
            .await
            .expect("call succeeds")
            .expect("record exists");
        assert_eq!(result, stored);
    }

    #[tokio::test]
    async fn cancel_on_a_missing_id_returns_none() {
        let mut repo = MockInspectionRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo)
            .cancel(&InspectionId::random())
            .await
            .expect("call succeeds");
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn create_opens_in_pending_state() {
        let mut repo = MockInspectionRepository::new();
        repo.expect_insert().times(1).returning(|_| Ok(()));

        let created = service(repo)
            .create(NewInspection {
                apartment_id: ApartmentId::random(),
                verifier_id: UserId::random(),
                items: Vec::new(),
                general_notes: None,
            })
            .await
            .expect("create succeeds");

        assert_eq!(created.status, InspectionStatus::Pending);
        assert_eq!(created.completed_at, None);
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.id.as_ref().starts_with("ins-"));
    }
}
