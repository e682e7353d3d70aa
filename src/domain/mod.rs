//! Domain primitives, services, and ports.
//!
//! Purpose: strongly typed entities for the property-management dashboard,
//! the access resolver that decides apartment visibility per role, and one
//! driving service per entity. Adapters live under [`crate::outbound`];
//! everything here talks to them through the traits in [`ports`].

pub mod access;
pub mod apartment;
pub mod apartment_service;
pub mod assignment_service;
pub mod auth;
pub mod auth_service;
pub mod building;
pub mod building_service;
pub mod error;
pub mod ids;
pub mod inspection;
pub mod inspection_service;
pub mod inventory;
pub mod inventory_service;
pub mod ports;
pub mod role;
pub mod user;
pub mod user_service;

pub use self::access::{AccessMode, AssignmentAccessResolver};
pub use self::apartment::{Apartment, ApartmentPatch, ApartmentStatus, NewApartment};
pub use self::apartment_service::ApartmentService;
pub use self::assignment_service::AssignmentService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::auth_service::AuthService;
pub use self::building::{Building, BuildingPatch, NewBuilding};
pub use self::building_service::BuildingService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{ApartmentId, BuildingId, IdValidationError, InspectionId, ItemId, UserId};
pub use self::inspection::{
    CheckResult, Inspection, InspectionItem, InspectionPatch, InspectionStatus, NewInspection,
};
pub use self::inspection_service::InspectionService;
pub use self::inventory::{
    InventoryItem, InventoryItemPatch, ItemCategory, ItemStatus, NewInventoryItem,
};
pub use self::inventory_service::InventoryService;
pub use self::role::{MenuEntry, Permission, Role};
pub use self::user::{NewUser, User, UserAccount, UserPatch};
pub use self::user_service::UserService;

/// Convenient domain result alias.
pub type DomainResult<T> = Result<T, Error>;
