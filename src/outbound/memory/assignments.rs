//! In-memory assignment ledgers.
//!
//! Two maps, owner → apartments and verifier → apartments, guarded by one
//! lock so a grant and its mirror-read cannot interleave mid-update. The
//! ledgers accept dangling user and apartment ids without complaint; the
//! resolver simply finds nothing to match them against.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{AssignmentRepository, RepositoryError};
use crate::domain::{ApartmentId, UserId};

#[derive(Default)]
struct Ledgers {
    owners: HashMap<UserId, Vec<ApartmentId>>,
    verifiers: HashMap<UserId, Vec<ApartmentId>>,
}

/// Latency-simulating in-memory [`AssignmentRepository`].
pub struct MemoryAssignmentRepository {
    ledgers: Mutex<Ledgers>,
    latency: Duration,
}

impl MemoryAssignmentRepository {
    /// Empty ledgers with the given artificial latency.
    pub fn new(latency: Duration) -> Self {
        Self::seeded(Vec::new(), Vec::new(), latency)
    }

    /// Ledgers pre-populated from (user, apartments) pairs.
    pub fn seeded(
        owners: Vec<(UserId, Vec<ApartmentId>)>,
        verifiers: Vec<(UserId, Vec<ApartmentId>)>,
        latency: Duration,
    ) -> Self {
        Self {
            ledgers: Mutex::new(Ledgers {
                owners: owners.into_iter().collect(),
                verifiers: verifiers.into_iter().collect(),
            }),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Ledgers> {
        self.ledgers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn grant(map: &mut HashMap<UserId, Vec<ApartmentId>>, user: &UserId, apartment: &ApartmentId) {
    let entries = map.entry(user.clone()).or_default();
    if !entries.contains(apartment) {
        entries.push(apartment.clone());
    }
}

fn revoke(
    map: &mut HashMap<UserId, Vec<ApartmentId>>,
    user: &UserId,
    apartment: &ApartmentId,
) -> bool {
    match map.get_mut(user) {
        Some(entries) => {
            let before = entries.len();
            entries.retain(|id| id != apartment);
            entries.len() < before
        }
        None => false,
    }
}

#[async_trait]
impl AssignmentRepository for MemoryAssignmentRepository {
    async fn owner_apartments(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<ApartmentId>, RepositoryError> {
        self.simulate_latency().await;
        Ok(self.lock().owners.get(owner_id).cloned().unwrap_or_default())
    }

    async fn verifier_apartments(
        &self,
        verifier_id: &UserId,
    ) -> Result<Vec<ApartmentId>, RepositoryError> {
        self.simulate_latency().await;
        Ok(self
            .lock()
            .verifiers
            .get(verifier_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn assign_owner(
        &self,
        owner_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<(), RepositoryError> {
        self.simulate_latency().await;
        grant(&mut self.lock().owners, owner_id, apartment_id);
        Ok(())
    }

    async fn revoke_owner(
        &self,
        owner_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<bool, RepositoryError> {
        self.simulate_latency().await;
        Ok(revoke(&mut self.lock().owners, owner_id, apartment_id))
    }

    async fn assign_verifier(
        &self,
        verifier_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<(), RepositoryError> {
        self.simulate_latency().await;
        grant(&mut self.lock().verifiers, verifier_id, apartment_id);
        Ok(())
    }

    async fn revoke_verifier(
        &self,
        verifier_id: &UserId,
        apartment_id: &ApartmentId,
    ) -> Result<bool, RepositoryError> {
        self.simulate_latency().await;
        Ok(revoke(&mut self.lock().verifiers, verifier_id, apartment_id))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn grants_are_idempotent() {
        let repo = MemoryAssignmentRepository::new(Duration::ZERO);
        let owner = UserId::random();
        let apartment = ApartmentId::random();

        repo.assign_owner(&owner, &apartment).await.expect("grant");
        repo.assign_owner(&owner, &apartment).await.expect("grant");

        let listed = repo.owner_apartments(&owner).await.expect("list");
        assert_eq!(listed, vec![apartment]);
    }

    #[tokio::test]
    async fn revoking_an_absent_grant_reports_false() {
        let repo = MemoryAssignmentRepository::new(Duration::ZERO);
        let revoked = repo
            .revoke_verifier(&UserId::random(), &ApartmentId::random())
            .await
            .expect("revoke call succeeds");
        assert!(!revoked);
    }

    #[tokio::test]
    async fn owner_and_verifier_ledgers_are_independent() {
        let repo = MemoryAssignmentRepository::new(Duration::ZERO);
        let user = UserId::random();
        let apartment = ApartmentId::random();

        repo.assign_owner(&user, &apartment).await.expect("grant");

        let as_verifier = repo.verifier_apartments(&user).await.expect("list");
        assert!(as_verifier.is_empty());
    }
}
