//! Inventory CRUD service with optional scoped-access gating.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use super::access::AccessMode;
use super::error::Error;
use super::ids::{ApartmentId, ItemId};
use super::inventory::{InventoryItem, InventoryItemPatch, NewInventoryItem};
use super::ports::{ApartmentAccess, InventoryRepository, RepositoryError};
use super::user::User;

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(format!("inventory repository error: {error}"))
}

/// CRUD operations over [`InventoryItem`] records.
#[derive(Clone)]
pub struct InventoryService<R> {
    repo: Arc<R>,
    access: Arc<dyn ApartmentAccess>,
    mode: AccessMode,
    clock: Arc<dyn Clock>,
}

impl<R> InventoryService<R> {
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

impl<R> InventoryService<R>
where
    R: InventoryRepository,
{
    /// All inventory items.
    pub async fn list(&self) -> Result<Vec<InventoryItem>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    /// One item, or `None` when the id is unknown.
    pub async fn get(&self, id: &ItemId) -> Result<Option<InventoryItem>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }

    /// Items recorded for one apartment, on behalf of `requester`.
    ///
    /// In [`AccessMode::Compat`] the requester is not checked against the
    /// parent apartment, matching the reference behaviour. In
    /// [`AccessMode::Strict`] an unauthorised requester silently gets an
    /// empty list.
    pub async fn list_for_apartment(
        &self,
        requester: &User,
        apartment_id: &ApartmentId,
    ) -> Result<Vec<InventoryItem>, Error> {
        if self.mode == AccessMode::Strict
            && !self.access.may_view(requester, apartment_id).await?
        {
            debug!(user = %requester.id, apartment = %apartment_id, "scoped inventory lookup denied");
            return Ok(Vec::new());
        }
        self.repo
            .find_by_apartment(apartment_id)
            .await
            .map_err(map_repository_error)
    }

    /// Create an item with `created_at == updated_at`.
    pub async fn create(&self, input: NewInventoryItem) -> Result<InventoryItem, Error> {
        let now = self.clock.utc();
        let item = InventoryItem {
            id: ItemId::random(),
            apartment_id: input.apartment_id,
            name: input.name,
            category: input.category,
            status: input.status,
            quantity: input.quantity,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(&item).await.map_err(map_repository_error)?;
        Ok(item)
    }

    /// Merge `patch` into the stored record and bump `updated_at`.
    /// Returns `None` when the id is unknown.
    pub async fn update(
        &self,
        id: &ItemId,
        patch: InventoryItemPatch,
    ) -> Result<Option<InventoryItem>, Error> {
        let Some(mut item) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        patch.apply_to(&mut item);
        item.updated_at = self.clock.utc();

        if self
            .repo
            .replace(&item)
            .await
            .map_err(map_repository_error)?
        {
            Ok(Some(item))
        } else {
            Ok(None)
        }
    }

    /// Delete an item. Returns `false` when the id is unknown.
    pub async fn delete(&self, id: &ItemId) -> Result<bool, Error> {
        self.repo.delete(id).await.map_err(map_repository_error)
    }
}
