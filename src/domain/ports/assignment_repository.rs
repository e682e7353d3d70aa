//! Port abstraction for the owner and verifier assignment ledgers.
//!
//! The ledgers are the sole authorisation relationship in the system: an
//! apartment not listed for an owner or verifier is invisible to them,
//! regardless of the apartment's own `owner_id` field.

use async_trait::async_trait;

use crate::domain::ids::{ApartmentId, UserId};

use super::RepositoryError;

/// Storage port for the two assignment ledgers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Apartment ids assigned to `owner_id`. A user with no ledger entry
    /// yields an empty list.
    async fn owner_apartments(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<ApartmentId>, RepositoryError>;

    /// Apartment ids assigned to `verifier_id`. A user with no ledger
    /// entry yields an empty list.
    async fn verifier_apartments(
        &self,
        verifier_id: &UserId,
    ) -> Result<Vec<ApartmentId>, RepositoryError>;

    /// Add an apartment to an owner's ledger entry. Idempotent.
    async fn assign_owner(
        &self,
        owner_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<(), RepositoryError>;

    /// Remove an apartment from an owner's ledger entry. Returns `false`
    /// when the pair was not present.
    async fn revoke_owner(
        &self,
        owner_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<bool, RepositoryError>;

    /// Add an apartment to a verifier's ledger entry. Idempotent.
    async fn assign_verifier(
        &self,
        verifier_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<(), RepositoryError>;

    /// Remove an apartment from a verifier's ledger entry. Returns `false`
    /// when the pair was not present.
    async fn revoke_verifier(
        &self,
        verifier_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<bool, RepositoryError>;
}
