//! Driving port for apartment visibility decisions.
//!
//! Inbound callers ask this port which apartments a user may act on
//! without knowing how the decision is made. The concrete resolver lives
//! in [`crate::domain::access`].

use async_trait::async_trait;

use crate::domain::apartment::Apartment;
use crate::domain::error::Error;
use crate::domain::ids::ApartmentId;
use crate::domain::user::User;

/// Domain use-case port for access resolution.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApartmentAccess: Send + Sync {
    /// Exactly the apartments `user` may act on, in storage order.
    ///
    /// Admins see everything; owners and verifiers see their ledger
    /// entries; anything else sees nothing. Never errors on an unknown
    /// role — the contract is fail-closed, not fail-loud.
    async fn visible_apartments(&self, user: &User) -> Result<Vec<Apartment>, Error>;

    /// Whether `user` may act on one specific apartment.
    async fn may_view(&self, user: &User, apartment_id: &ApartmentId) -> Result<bool, Error>;
}
