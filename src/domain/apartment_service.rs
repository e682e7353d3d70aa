//! Apartment CRUD service and per-user visibility.

use std::sync::Arc;

use mockable::Clock;

use super::apartment::{Apartment, ApartmentPatch, NewApartment};
use super::error::Error;
use super::ids::{ApartmentId, BuildingId};
use super::ports::{ApartmentAccess, ApartmentRepository, RepositoryError};
use super::user::User;

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(format!("apartment repository error: {error}"))
}

/// CRUD operations over [`Apartment`] records plus visibility resolution.
#[derive(Clone)]
pub struct ApartmentService<R> {
    repo: Arc<R>,
    access: Arc<dyn ApartmentAccess>,
    clock: Arc<dyn Clock>,
}

impl<R> ApartmentService<R> {
    /// Create a new service over the given repository and access resolver.
    pub fn new(repo: Arc<R>, access: Arc<dyn ApartmentAccess>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, access, clock }
    }
}

impl<R> ApartmentService<R>
where
    R: ApartmentRepository,
{
    /// All apartments, regardless of requester. Management screens use
    /// this; role-scoped views go through [`Self::visible_to`].
    pub async fn list(&self) -> Result<Vec<Apartment>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    /// Exactly the apartments `user` may act on.
    pub async fn visible_to(&self, user: &User) -> Result<Vec<Apartment>, Error> {
        self.access.visible_apartments(user).await
    }

    /// One apartment, or `None` when the id is unknown.
    pub async fn get(&self, id: &ApartmentId) -> Result<Option<Apartment>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }

    /// Apartments in a building. A dangling building id yields an empty
    /// list.
    pub async fn list_by_building(
        &self,
        building_id: &BuildingId,
    ) -> Result<Vec<Apartment>, Error> {
        self.repo
            .find_by_building(building_id)
            .await
            .map_err(map_repository_error)
    }

    /// Create an apartment with `created_at == updated_at`.
    pub async fn create(&self, input: NewApartment) -> Result<Apartment, Error> {
        let now = self.clock.utc();
        let apartment = Apartment {
            id: ApartmentId::random(),
            building_id: input.building_id,
            number: input.number,
            floor: input.floor,
            owner_id: input.owner_id,
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(&apartment)
            .await
            .map_err(map_repository_error)?;
        Ok(apartment)
    }

    /// Merge `patch` into the stored record and bump `updated_at`.
    /// Returns `None` when the id is unknown.
    pub async fn update(
        &self,
        id: &ApartmentId,
        patch: ApartmentPatch,
    ) -> Result<Option<Apartment>, Error> {
        let Some(mut apartment) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        patch.apply_to(&mut apartment);
        apartment.updated_at = self.clock.utc();

        if self
            .repo
            .replace(&apartment)
            .await
            .map_err(map_repository_error)?
        {
            Ok(Some(apartment))
        } else {
            Ok(None)
        }
    }

    /// Delete an apartment. Returns `false` when the id is unknown. Does
    /// not cascade: inventory and inspections keep their dangling
    /// `apartment_id`.
    pub async fn delete(&self, id: &ApartmentId) -> Result<bool, Error> {
        self.repo.delete(id).await.map_err(map_repository_error)
    }
}
