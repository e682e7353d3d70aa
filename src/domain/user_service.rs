//! User account management service.
//!
//! Management screens deal in credential-free [`User`] views; the
//! underlying [`UserAccount`] records stay inside this service and the
//! auth flow.

use std::sync::Arc;

use mockable::Clock;

use super::error::Error;
use super::ids::UserId;
use super::ports::{AccountRepository, RepositoryError};
use super::user::{NewUser, User, UserPatch};
use crate::domain::user::UserAccount;

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(format!("account repository error: {error}"))
}

/// CRUD operations over user accounts, exposed as public [`User`] views.
#[derive(Clone)]
pub struct UserService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

impl<R> UserService<R>
where
    R: AccountRepository,
{
    /// All users, credential-free.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        let accounts = self.repo.list().await.map_err(map_repository_error)?;
        Ok(accounts.iter().map(UserAccount::public).collect())
    }

    /// One user, or `None` when the id is unknown.
    pub async fn get(&self, id: &UserId) -> Result<Option<User>, Error> {
        let account = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        Ok(account.as_ref().map(UserAccount::public))
    }

    /// Create an account and return its public view, with
    /// `created_at == updated_at`.
    pub async fn create(&self, input: NewUser) -> Result<User, Error> {
        let now = self.clock.utc();
        let account = UserAccount {
            id: UserId::random(),
            name: input.name,
            email: input.email,
            username: input.username,
            password: input.password,
            role: input.role,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(&account)
            .await
            .map_err(map_repository_error)?;
        Ok(account.public())
    }

    /// Merge `patch` into the stored account and bump `updated_at`.
    /// Returns `None` when the id is unknown.
    pub async fn update(&self, id: &UserId, patch: UserPatch) -> Result<Option<User>, Error> {
        let Some(mut account) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        patch.apply_to(&mut account);
        account.updated_at = self.clock.utc();

        if self
            .repo
            .replace(&account)
            .await
            .map_err(map_repository_error)?
        {
            Ok(Some(account.public()))
        } else {
            Ok(None)
        }
    }

    /// Delete an account. Returns `false` when the id is unknown. Ledger
    /// entries for the user are left behind and simply stop matching.
    pub async fn delete(&self, id: &UserId) -> Result<bool, Error> {
        self.repo.delete(id).await.map_err(map_repository_error)
    }
}
