//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (storage, session persistence). Every trait exposes typed errors so
//! adapters map their failures into predictable variants. The in-memory
//! adapters shipped with this crate are effectively infallible, but the
//! signatures leave room for a real persistence layer later.

mod access;
mod account_repository;
mod apartment_repository;
mod assignment_repository;
mod building_repository;
mod inspection_repository;
mod inventory_repository;
mod session_store;

pub use access::ApartmentAccess;
#[cfg(test)]
pub use access::MockApartmentAccess;
pub use account_repository::AccountRepository;
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use apartment_repository::ApartmentRepository;
#[cfg(test)]
pub use apartment_repository::MockApartmentRepository;
pub use assignment_repository::AssignmentRepository;
#[cfg(test)]
pub use assignment_repository::MockAssignmentRepository;
pub use building_repository::BuildingRepository;
#[cfg(test)]
pub use building_repository::MockBuildingRepository;
pub use inspection_repository::InspectionRepository;
#[cfg(test)]
pub use inspection_repository::MockInspectionRepository;
pub use inventory_repository::InventoryRepository;
#[cfg(test)]
pub use inventory_repository::MockInventoryRepository;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use session_store::MockSessionStore;

/// Errors raised by storage adapters.
///
/// The variants mirror what a persistence-backed adapter would surface;
/// the bundled in-memory adapters never construct them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be reached or failed mid-operation.
    #[error("repository backend failed: {message}")]
    Backend {
        /// Adapter-provided failure description.
        message: String,
    },
    /// A stored record could not be encoded or decoded.
    #[error("repository serialization failed: {message}")]
    Serialization {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl RepositoryError {
    /// Helper for backend-level failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Helper for encode/decode failures.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}
