//! Port abstraction for user account storage adapters.

use async_trait::async_trait;

use crate::domain::ids::UserId;
use crate::domain::user::UserAccount;

use super::RepositoryError;

/// Storage port for [`UserAccount`] records.
///
/// Accounts include credentials; only the auth flow and user management
/// service touch this port directly. Everything else sees the stripped
/// [`crate::domain::User`] shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All accounts, in insertion order.
    async fn list(&self) -> Result<Vec<UserAccount>, RepositoryError>;

    /// Fetch one account by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, RepositoryError>;

    /// Fetch the account whose username or email matches `identifier`,
    /// case-insensitively. Returns the first match in insertion order.
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserAccount>, RepositoryError>;

    /// Insert a new account record.
    async fn insert(&self, account: &UserAccount) -> Result<(), RepositoryError>;

    /// Replace an existing record in full. Returns `false` when no record
    /// with the same id exists.
    async fn replace(&self, account: &UserAccount) -> Result<bool, RepositoryError>;

    /// Delete by id. Returns `false` when no record matched.
    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError>;
}
