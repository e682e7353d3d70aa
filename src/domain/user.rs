//! User records and login accounts.
//!
//! [`User`] is the public shape handed to the presentation layer and stored
//! in the session; [`UserAccount`] additionally carries login credentials
//! and never leaves the auth flow. Authentication strips an account down to
//! its public user before anything else sees it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;
use super::role::Role;

/// A user as seen by the rest of the system. Carries no credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email; also accepted as a login identifier.
    pub email: String,
    /// Role controlling visibility and capabilities.
    pub role: Role,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

/// A user record together with its login credentials.
///
/// The reference system stores passwords in plaintext fixtures; that is
/// preserved here because the accounts are demo data, not real secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Stable identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email; accepted as a login identifier, compared
    /// case-insensitively.
    pub email: String,
    /// Login username; compared case-insensitively.
    pub username: String,
    /// Plaintext fixture password; compared exactly.
    pub password: String,
    /// Role controlling visibility and capabilities.
    pub role: Role,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// The credential-free public view of this account.
    pub fn public(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether `identifier` names this account, by username or email.
    /// Matching is case-insensitive on both.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.username.eq_ignore_ascii_case(identifier) || self.email.eq_ignore_ascii_case(identifier)
    }
}

/// Input for creating a user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Login username.
    pub username: String,
    /// Plaintext fixture password.
    pub password: String,
    /// Role to grant.
    pub role: Role,
}

/// Shallow-merge update for a user account. `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New display name, if changing.
    pub name: Option<String>,
    /// New contact email, if changing.
    pub email: Option<String>,
    /// New role, if changing.
    pub role: Option<Role>,
}

impl UserPatch {
    /// Merge the set fields into `account`. Timestamps are the caller's
    /// concern.
    pub fn apply_to(self, account: &mut UserAccount) {
        if let Some(name) = self.name {
            account.name = name;
        }
        if let Some(email) = self.email {
            account.email = email;
        }
        if let Some(role) = self.role {
            account.role = role;
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn account() -> UserAccount {
        let now = Utc::now();
        UserAccount {
            id: UserId::random(),
            name: "Maria Owner".to_owned(),
            email: "Maria@Example.com".to_owned(),
            username: "maria".to_owned(),
            password: "hunter2".to_owned(),
            role: Role::Owner,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn public_view_strips_credentials() {
        let account = account();
        let user = account.public();
        let json = serde_json::to_value(&user).expect("user serialises");
        assert!(json.get("password").is_none());
        assert!(json.get("username").is_none());
        assert_eq!(user.id, account.id);
        assert_eq!(user.role, Role::Owner);
    }

    #[rstest]
    #[case("maria", true)]
    #[case("MARIA", true)]
    #[case("maria@example.com", true)]
    #[case("Maria@Example.com", true)]
    #[case("other", false)]
    fn identifier_matching_is_case_insensitive(#[case] identifier: &str, #[case] expected: bool) {
        assert_eq!(account().matches_identifier(identifier), expected);
    }

    #[test]
    fn patch_merges_only_the_set_fields() {
        let mut account = account();
        let original_email = account.email.clone();
        UserPatch {
            name: Some("Maria Renamed".to_owned()),
            ..UserPatch::default()
        }
        .apply_to(&mut account);
        assert_eq!(account.name, "Maria Renamed");
        assert_eq!(account.email, original_email);
        assert_eq!(account.role, Role::Owner);
    }
}
