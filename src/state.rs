//! Application assembly.
//!
//! Wires the in-memory adapters, the access resolver, and the services
//! into one ready-to-use graph. Hosts that bring their own adapters can
//! skip this module and construct the services directly.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::config::Config;
use crate::domain::ports::{ApartmentAccess, SessionStore};
use crate::domain::{
    ApartmentService, AssignmentAccessResolver, AssignmentService, AuthService, BuildingService,
    InspectionService, InventoryService, UserService,
};
use crate::example_data::ExampleDataSet;
use crate::outbound::memory::{
    MemoryAccountRepository, MemoryApartmentRepository, MemoryAssignmentRepository,
    MemoryBuildingRepository, MemoryInspectionRepository, MemoryInventoryRepository,
};
use crate::outbound::session::{JsonFileSessionStore, MemorySessionStore};

/// The fully wired service graph over in-memory storage.
pub struct AppState {
    /// Login, logout, current user.
    pub auth: AuthService<MemoryAccountRepository>,
    /// User account management.
    pub users: UserService<MemoryAccountRepository>,
    /// Building CRUD.
    pub buildings: BuildingService<MemoryBuildingRepository>,
    /// Apartment CRUD and visibility.
    pub apartments: ApartmentService<MemoryApartmentRepository>,
    /// Inventory CRUD and scoped lookups.
    pub inventory: InventoryService<MemoryInventoryRepository>,
    /// Inspection CRUD and lifecycle.
    pub inspections: InspectionService<MemoryInspectionRepository>,
    /// Assignment ledger administration.
    pub assignments: AssignmentService<MemoryAssignmentRepository>,
}

impl AppState {
    /// Assemble the graph over empty storage.
    pub fn build(config: &Config) -> Self {
        Self::assemble(config, None)
    }

    /// Assemble the graph pre-populated with `data`.
    pub fn seeded(config: &Config, data: ExampleDataSet) -> Self {
        Self::assemble(config, Some(data))
    }

    fn assemble(config: &Config, data: Option<ExampleDataSet>) -> Self {
        let latency = config.latency();
        let data = data.unwrap_or(ExampleDataSet {
            accounts: Vec::new(),
            buildings: Vec::new(),
            apartments: Vec::new(),
            inventory: Vec::new(),
            inspections: Vec::new(),
            owner_assignments: Vec::new(),
            verifier_assignments: Vec::new(),
        });

        let accounts = Arc::new(MemoryAccountRepository::seeded(data.accounts, latency));
        let buildings = Arc::new(MemoryBuildingRepository::seeded(data.buildings, latency));
        let apartments = Arc::new(MemoryApartmentRepository::seeded(data.apartments, latency));
        let inventory = Arc::new(MemoryInventoryRepository::seeded(data.inventory, latency));
        let inspections = Arc::new(MemoryInspectionRepository::seeded(data.inspections, latency));
        let assignments = Arc::new(MemoryAssignmentRepository::seeded(
            data.owner_assignments,
            data.verifier_assignments,
            latency,
        ));

        let sessions: Arc<dyn SessionStore> = match &config.session_file {
            Some(path) => Arc::new(JsonFileSessionStore::new(path.clone())),
            None => Arc::new(MemorySessionStore::new()),
        };
        let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
        let access: Arc<dyn ApartmentAccess> = Arc::new(AssignmentAccessResolver::new(
            apartments.clone(),
            assignments.clone(),
        ));

        Self {
            auth: AuthService::new(accounts.clone(), sessions),
            users: UserService::new(accounts, clock.clone()),
            buildings: BuildingService::new(buildings, clock.clone()),
            apartments: ApartmentService::new(apartments, access.clone(), clock.clone()),
            inventory: InventoryService::new(
                inventory,
                access.clone(),
                config.access_mode,
                clock.clone(),
            ),
            inspections: InspectionService::new(inspections, access, config.access_mode, clock),
            assignments: AssignmentService::new(assignments),
        }
    }
}
