//! Assignment-ledger access resolution.
//!
//! The resolver answers one question: which apartments may this user act
//! on? Admins see every apartment. Owners and verifiers see exactly the
//! apartments listed for them in their ledger — the apartment's own
//! `owner_id` field grants nothing, even when the two disagree. Unknown
//! roles resolve to an empty set without raising an error; silence is the
//! contract here, not a fault.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::apartment::Apartment;
use super::error::Error;
use super::ids::{ApartmentId, UserId};
use super::ports::{
    ApartmentAccess, ApartmentRepository, AssignmentRepository, RepositoryError,
};
use super::role::Role;
use super::user::User;

/// How apartment-scoped lookups treat the caller.
///
/// The reference dashboard never re-checks whether a caller may see the
/// apartment whose inventory or inspections they request; any caller with
/// an apartment id gets the rows. `Compat` preserves that gap; `Strict`
/// closes it by consulting the resolver and degrading to an empty list
/// when the check fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Preserve the reference behaviour: scoped lookups skip the caller
    /// check.
    #[default]
    Compat,
    /// Re-check the caller against the parent apartment; unauthorised
    /// callers silently get an empty list.
    Strict,
}

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(format!("access resolution failed: {error}"))
}

/// Access resolver backed by the apartment store and assignment ledgers.
pub struct AssignmentAccessResolver<P, A> {
    apartments: Arc<P>,
    assignments: Arc<A>,
}

impl<P, A> AssignmentAccessResolver<P, A> {
    /// Create a resolver over the given stores.
    pub fn new(apartments: Arc<P>, assignments: Arc<A>) -> Self {
        Self {
            apartments,
            assignments,
        }
    }
}

impl<P, A> AssignmentAccessResolver<P, A>
where
    P: ApartmentRepository,
    A: AssignmentRepository,
{
    async fn ledger_for(&self, role: Role, user_id: &UserId) -> Result<Vec<ApartmentId>, Error> {
        match role {
            Role::Owner => self
                .assignments
                .owner_apartments(user_id)
                .await
                .map_err(map_repository_error),
            Role::Verifier => self
                .assignments
                .verifier_apartments(user_id)
                .await
                .map_err(map_repository_error),
            Role::Admin | Role::Unknown => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl<P, A> ApartmentAccess for AssignmentAccessResolver<P, A>
where
    P: ApartmentRepository,
    A: AssignmentRepository,
{
    async fn visible_apartments(&self, user: &User) -> Result<Vec<Apartment>, Error> {
        match user.role {
            Role::Admin => self.apartments.list().await.map_err(map_repository_error),
            Role::Owner | Role::Verifier => {
                let assigned: HashSet<ApartmentId> = self
                    .ledger_for(user.role, &user.id)
                    .await?
                    .into_iter()
                    .collect();
                if assigned.is_empty() {
                    return Ok(Vec::new());
                }
                let all = self.apartments.list().await.map_err(map_repository_error)?;
                Ok(all
                    .into_iter()
                    .filter(|apartment| assigned.contains(&apartment.id))
                    .collect())
            }
            Role::Unknown => {
                debug!(user = %user.id, "unknown role resolved to no access");
                Ok(Vec::new())
            }
        }
    }

    async fn may_view(&self, user: &User, apartment_id: &ApartmentId) -> Result<bool, Error> {
        match user.role {
            Role::Admin => Ok(true),
            Role::Owner | Role::Verifier => {
                let assigned = self.ledger_for(user.role, &user.id).await?;
                Ok(assigned.contains(apartment_id))
            }
            Role::Unknown => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::apartment::ApartmentStatus;
    use crate::domain::ids::BuildingId;
    use crate::domain::ports::{MockApartmentRepository, MockAssignmentRepository};
    use chrono::Utc;
    use rstest::rstest;

    fn user_with_role(role: Role) -> User {
        let now = Utc::now();
        User {
            id: UserId::random(),
            name: "Test User".to_owned(),
            email: "test@example.com".to_owned(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    fn apartment(number: &str, owner_id: Option<UserId>) -> Apartment {
        let now = Utc::now();
        Apartment {
            id: ApartmentId::random(),
            building_id: BuildingId::random(),
            number: number.to_owned(),
            floor: None,
            owner_id,
            status: ApartmentStatus::Vacant,
            created_at: now,
            updated_at: now,
        }
    }

    fn resolver(
        apartments: MockApartmentRepository,
        assignments: MockAssignmentRepository,
    ) -> AssignmentAccessResolver<MockApartmentRepository, MockAssignmentRepository> {
        AssignmentAccessResolver::new(Arc::new(apartments), Arc::new(assignments))
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[tokio::test]
    async fn admins_see_the_full_apartment_set(#[case] count: usize) {
        let rows: Vec<Apartment> = (0..count)
            .map(|n| apartment(&format!("{n}A"), None))
            .collect();
        let expected = rows.clone();

        let mut apartments = MockApartmentRepository::new();
        apartments.expect_list().returning(move || Ok(rows.clone()));
        let assignments = MockAssignmentRepository::new();

        let visible = resolver(apartments, assignments)
            .visible_apartments(&user_with_role(Role::Admin))
            .await
            .expect("resolution succeeds");
        assert_eq!(visible, expected);
    }

    #[tokio::test]
    async fn owners_see_only_their_ledger_entries() {
        let owner = user_with_role(Role::Owner);
        let assigned = apartment("1A", None);
        // Listed as owner on the record, but absent from the ledger: the
        // ledger wins and this apartment stays invisible.
        let direct_only = apartment("2B", Some(owner.id.clone()));
        let unrelated = apartment("3C", None);

        let rows = vec![assigned.clone(), direct_only.clone(), unrelated];
        let assigned_id = assigned.id.clone();

        let mut apartments = MockApartmentRepository::new();
        apartments.expect_list().returning(move || Ok(rows.clone()));
        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_owner_apartments()
            .returning(move |_| Ok(vec![assigned_id.clone()]));

        let visible = resolver(apartments, assignments)
            .visible_apartments(&owner)
            .await
            .expect("resolution succeeds");
        assert_eq!(visible, vec![assigned]);
    }

    #[tokio::test]
    async fn owners_without_a_ledger_entry_see_nothing() {
        let mut apartments = MockApartmentRepository::new();
        // The apartment list must not even be consulted for an empty ledger.
        apartments.expect_list().never();
        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_owner_apartments()
            .returning(|_| Ok(Vec::new()));

        let visible = resolver(apartments, assignments)
            .visible_apartments(&user_with_role(Role::Owner))
            .await
            .expect("resolution succeeds");
        assert!(visible.is_empty());
    }

    #[tokio::test]
    async fn verifiers_resolve_against_the_verifier_ledger() {
        let verifier = user_with_role(Role::Verifier);
        let assigned = apartment("7D", None);
        let other = apartment("8E", None);
        let rows = vec![assigned.clone(), other];
        let assigned_id = assigned.id.clone();

        let mut apartments = MockApartmentRepository::new();
        apartments.expect_list().returning(move || Ok(rows.clone()));
        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_verifier_apartments()
            .returning(move |_| Ok(vec![assigned_id.clone()]));
        assignments.expect_owner_apartments().never();

        let visible = resolver(apartments, assignments)
            .visible_apartments(&verifier)
            .await
            .expect("resolution succeeds");
        assert_eq!(visible, vec![assigned]);
    }

    #[tokio::test]
    async fn unknown_roles_fail_closed_without_an_error() {
        let apartments = MockApartmentRepository::new();
        let assignments = MockAssignmentRepository::new();

        let result = resolver(apartments, assignments)
            .visible_apartments(&user_with_role(Role::Unknown))
            .await;
        assert_eq!(result, Ok(Vec::new()));
    }

    #[rstest]
    #[case(Role::Admin, true)]
    #[case(Role::Unknown, false)]
    #[tokio::test]
    async fn may_view_short_circuits_for_admin_and_unknown(
        #[case] role: Role,
        #[case] expected: bool,
    ) {
        let apartments = MockApartmentRepository::new();
        let assignments = MockAssignmentRepository::new();

        let allowed = resolver(apartments, assignments)
            .may_view(&user_with_role(role), &ApartmentId::random())
            .await
            .expect("check succeeds");
        assert_eq!(allowed, expected);
    }

    #[tokio::test]
    async fn may_view_checks_the_ledger_for_owners() {
        let owner = user_with_role(Role::Owner);
        let assigned = ApartmentId::random();
        let ledger = vec![assigned.clone()];

        let apartments = MockApartmentRepository::new();
        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_owner_apartments()
            .returning(move |_| Ok(ledger.clone()));

        let resolver = resolver(apartments, assignments);
        assert!(resolver
            .may_view(&owner, &assigned)
            .await
            .expect("check succeeds"));
        assert!(!resolver
            .may_view(&owner, &ApartmentId::random())
            .await
            .expect("check succeeds"));
    }
}
