//! Roles, navigation menus, and named permissions.
//!
//! Both mappings are total pure functions over the role set: every known
//! role gets a fixed, ordered answer and anything else falls through to the
//! empty branch. Unknown roles therefore see nothing and can do nothing,
//! which matches the fail-closed posture of the access resolver.

use serde::{Deserialize, Serialize};

/// User role controlling visibility and capabilities.
///
/// `Unknown` absorbs any unrecognised role string during deserialisation
/// (for example a stale session blob written by a newer build) so the value
/// still parses and then resolves to no access, rather than failing loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unrestricted access to every apartment and management screen.
    Admin,
    /// Access limited to apartments listed in the owner ledger.
    Owner,
    /// Access limited to apartments listed in the verifier ledger;
    /// responsible for creating inspections.
    Verifier,
    /// Any role value this build does not recognise. Grants nothing.
    #[serde(other)]
    Unknown,
}

/// A single navigation entry in the dashboard menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Human-readable label.
    pub label: &'static str,
    /// Route path the entry links to.
    pub path: &'static str,
}

const fn entry(label: &'static str, path: &'static str) -> MenuEntry {
    MenuEntry { label, path }
}

const ADMIN_MENU: &[MenuEntry] = &[
    entry("Dashboard", "/dashboard"),
    entry("Buildings", "/buildings"),
    entry("Apartments", "/apartments"),
    entry("Inventory", "/inventory"),
    entry("Inspections", "/inspections"),
    entry("Users", "/users"),
    entry("Assignments", "/assignments"),
];

const OWNER_MENU: &[MenuEntry] = &[
    entry("Dashboard", "/dashboard"),
    entry("My Apartments", "/apartments"),
    entry("Inventory", "/inventory"),
];

const VERIFIER_MENU: &[MenuEntry] = &[
    entry("Dashboard", "/dashboard"),
    entry("Assigned Apartments", "/apartments"),
    entry("Inspections", "/inspections"),
];

/// Named capability checked by the presentation layer before exposing an
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create, update, and delete user accounts.
    ManageUsers,
    /// Create, update, and delete buildings.
    ManageBuildings,
    /// Create, update, and delete apartments.
    ManageApartments,
    /// Edit owner and verifier assignment ledgers.
    ManageAssignments,
    /// Create, update, and delete inventory items.
    ManageInventory,
    /// View inventory lists.
    ViewInventory,
    /// Start new inspections.
    CreateInspections,
    /// View inspection records.
    ViewInspections,
    /// Complete or cancel inspections.
    CompleteInspections,
    /// View aggregate dashboard reports.
    ViewReports,
}

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ManageUsers,
    Permission::ManageBuildings,
    Permission::ManageApartments,
    Permission::ManageAssignments,
    Permission::ManageInventory,
    Permission::ViewInventory,
    Permission::CreateInspections,
    Permission::ViewInspections,
    Permission::CompleteInspections,
    Permission::ViewReports,
];

const OWNER_PERMISSIONS: &[Permission] = &[
    Permission::ViewInventory,
    Permission::ViewInspections,
    Permission::ViewReports,
];

const VERIFIER_PERMISSIONS: &[Permission] = &[
    Permission::ViewInventory,
    Permission::CreateInspections,
    Permission::ViewInspections,
    Permission::CompleteInspections,
];

impl Role {
    /// Fixed, ordered navigation menu for this role.
    pub fn menu(self) -> &'static [MenuEntry] {
        match self {
            Self::Admin => ADMIN_MENU,
            Self::Owner => OWNER_MENU,
            Self::Verifier => VERIFIER_MENU,
            Self::Unknown => &[],
        }
    }

    /// Fixed set of capabilities granted to this role.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Admin => ADMIN_PERMISSIONS,
            Self::Owner => OWNER_PERMISSIONS,
            Self::Verifier => VERIFIER_PERMISSIONS,
            Self::Unknown => &[],
        }
    }

    /// Whether this role holds the named permission.
    pub fn has(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[test]
    fn admin_holds_every_permission() {
        assert_eq!(Role::Admin.permissions().len(), 10);
        assert!(Role::Admin.has(Permission::ManageUsers));
        assert!(Role::Admin.has(Permission::CompleteInspections));
    }

    #[rstest]
    #[case(Role::Owner, Permission::ManageInventory, false)]
    #[case(Role::Owner, Permission::ViewInventory, true)]
    #[case(Role::Verifier, Permission::CreateInspections, true)]
    #[case(Role::Verifier, Permission::ManageBuildings, false)]
    fn non_admin_roles_hold_only_their_grants(
        #[case] role: Role,
        #[case] permission: Permission,
        #[case] expected: bool,
    ) {
        assert_eq!(role.has(permission), expected);
    }

    #[test]
    fn unknown_roles_see_nothing_and_can_do_nothing() {
        assert!(Role::Unknown.menu().is_empty());
        assert!(Role::Unknown.permissions().is_empty());
    }

    #[test]
    fn menus_keep_their_order() {
        let labels: Vec<&str> = Role::Admin.menu().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Buildings",
                "Apartments",
                "Inventory",
                "Inspections",
                "Users",
                "Assignments",
            ]
        );
    }

    #[test]
    fn unrecognised_role_strings_parse_as_unknown() {
        let role: Role = serde_json::from_str("\"superuser\"").expect("lenient parse");
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn known_role_strings_round_trip() {
        let role: Role = serde_json::from_str("\"verifier\"").expect("role parses");
        assert_eq!(role, Role::Verifier);
        assert_eq!(
            serde_json::to_string(&Role::Owner).expect("role serialises"),
            "\"owner\""
        );
    }
}
