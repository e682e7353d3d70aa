//! In-memory storage adapters.
//!
//! These adapters stand in for the reference system's mock services: each
//! call yields for a configurable artificial delay and then filters or
//! mutates a guarded `Vec`. They are the default wiring for demos and
//! tests; a persistence-backed adapter set can replace them without
//! touching the domain.

mod accounts;
mod apartments;
mod assignments;
mod buildings;
mod inspections;
mod inventory;
mod table;

pub use accounts::MemoryAccountRepository;
pub use apartments::MemoryApartmentRepository;
pub use assignments::MemoryAssignmentRepository;
pub use buildings::MemoryBuildingRepository;
pub use inspections::MemoryInspectionRepository;
pub use inventory::MemoryInventoryRepository;
