//! Assignment ledger administration.
//!
//! Thin service over the ledger port: admins grant and revoke apartment
//! access for owners and verifiers. Grants are idempotent; revoking a pair
//! that was never granted reports `false` rather than erroring.

use std::sync::Arc;

use super::error::Error;
use super::ids::{ApartmentId, UserId};
use super::ports::{AssignmentRepository, RepositoryError};

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(format!("assignment repository error: {error}"))
}

/// Grant/revoke operations over the assignment ledgers.
#[derive(Clone)]
pub struct AssignmentService<A> {
    repo: Arc<A>,
}

impl<A> AssignmentService<A> {
    /// Create a new service over the given ledger store.
    pub fn new(repo: Arc<A>) -> Self {
        Self { repo }
    }
}

impl<A> AssignmentService<A>
where
    A: AssignmentRepository,
{
    /// Apartment ids an owner has been granted.
    pub async fn owner_apartments(&self, owner_id: &UserId) -> Result<Vec<ApartmentId>, Error> {
        self.repo
            .owner_apartments(owner_id)
            .await
            .map_err(map_repository_error)
    }

    /// Apartment ids a verifier has been granted.
    pub async fn verifier_apartments(
        &self,
        verifier_id: &UserId,
    ) -> Result<Vec<ApartmentId>, Error> {
        self.repo
            .verifier_apartments(verifier_id)
            .await
            .map_err(map_repository_error)
    }

    /// Grant an owner access to an apartment.
    pub async fn assign_owner(
        &self,
        owner_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<(), Error> {
        self.repo
            .assign_owner(owner_id, apartment_id)
            .await
            .map_err(map_repository_error)
    }

    /// Revoke an owner's access. Returns `false` when the grant did not
    /// exist.
    pub async fn revoke_owner(
        &self,
        owner_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<bool, Error> {
        self.repo
            .revoke_owner(owner_id, apartment_id)
            .await
            .map_err(map_repository_error)
    }

    /// Grant a verifier access to an apartment.
    pub async fn assign_verifier(
        &self,
        verifier_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<(), Error> {
        self.repo
            .assign_verifier(verifier_id, apartment_id)
            .await
            .map_err(map_repository_error)
    }

    /// Revoke a verifier's access. Returns `false` when the grant did not
    /// exist.
    pub async fn revoke_verifier(
        &self,
        verifier_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<bool, Error> {
        self.repo
            .revoke_verifier(verifier_id, apartment_id)
            .await
            .map_err(map_repository_error)
    }
}
