//! Demo dataset.
//!
//! A small, internally consistent scenario for demos and integration
//! tests: three users (one per role), two buildings, four apartments,
//! inventory, and a couple of inspections. The dataset deliberately
//! includes one apartment whose `owner_id` names the owner while the
//! owner ledger does not — the ledger wins, so that apartment must stay
//! invisible to its nominal owner.

use chrono::Utc;

use crate::domain::{
    Apartment, ApartmentId, ApartmentStatus, Building, BuildingId, CheckResult, Inspection,
    InspectionId, InspectionItem, InspectionStatus, InventoryItem, ItemCategory, ItemId,
    ItemStatus, Role, UserAccount, UserId,
};

/// Demo login credentials, one per role.
pub const ADMIN_LOGIN: (&str, &str) = ("admin", "admin123");
/// Owner demo login.
pub const OWNER_LOGIN: (&str, &str) = ("maria", "owner123");
/// Verifier demo login.
pub const VERIFIER_LOGIN: (&str, &str) = ("viktor", "verify123");

/// A generated demo scenario ready to seed the memory adapters.
pub struct ExampleDataSet {
    /// User accounts with fixture credentials.
    pub accounts: Vec<UserAccount>,
    /// Buildings.
    pub buildings: Vec<Building>,
    /// Apartments across the buildings.
    pub apartments: Vec<Apartment>,
    /// Inventory items across the apartments.
    pub inventory: Vec<InventoryItem>,
    /// Inspections taken by the verifier.
    pub inspections: Vec<Inspection>,
    /// Owner ledger entries.
    pub owner_assignments: Vec<(UserId, Vec<ApartmentId>)>,
    /// Verifier ledger entries.
    pub verifier_assignments: Vec<(UserId, Vec<ApartmentId>)>,
}

impl ExampleDataSet {
    /// Generate the demo scenario. Ids are fresh on every call; the
    /// relationships between the rows are always the same.
    pub fn generate() -> Self {
        let now = Utc::now();

        let account = |name: &str, email: &str, login: (&str, &str), role: Role| UserAccount {
            id: UserId::random(),
            name: name.to_owned(),
            email: email.to_owned(),
            username: login.0.to_owned(),
            password: login.1.to_owned(),
            role,
            created_at: now,
            updated_at: now,
        };
        let admin = account("Astrid Admin", "astrid@example.com", ADMIN_LOGIN, Role::Admin);
        let owner = account("Maria Owner", "maria@example.com", OWNER_LOGIN, Role::Owner);
        let verifier = account(
            "Viktor Verifier",
            "viktor@example.com",
            VERIFIER_LOGIN,
            Role::Verifier,
        );

        let harbour = Building {
            id: BuildingId::random(),
            name: "Harbour House".to_owned(),
            address: "1 Quay Street".to_owned(),
            total_apartments: 2,
            created_at: now,
            updated_at: now,
        };
        let mill = Building {
            id: BuildingId::random(),
            name: "Mill Court".to_owned(),
            address: "14 Mill Lane".to_owned(),
            total_apartments: 2,
            created_at: now,
            updated_at: now,
        };

        let apartment = |building: &Building,
                         number: &str,
                         floor: i16,
                         owner_id: Option<UserId>,
                         status: ApartmentStatus| Apartment {
            id: ApartmentId::random(),
            building_id: building.id.clone(),
            number: number.to_owned(),
            floor: Some(floor),
            owner_id,
            status,
            created_at: now,
            updated_at: now,
        };
        let assigned = apartment(
            &harbour,
            "1A",
            1,
            Some(owner.id.clone()),
            ApartmentStatus::Occupied,
        );
        // Named on the record but absent from the ledger: invisible to Maria.
        let record_only = apartment(
            &harbour,
            "2B",
            2,
            Some(owner.id.clone()),
            ApartmentStatus::Occupied,
        );
        let vacant = apartment(&mill, "3C", 3, None, ApartmentStatus::Vacant);
        let workshop = apartment(&mill, "4D", 4, None, ApartmentStatus::Maintenance);

        let item = |apartment: &Apartment,
                    name: &str,
                    category: ItemCategory,
                    status: ItemStatus,
                    quantity: u32| InventoryItem {
            id: ItemId::random(),
            apartment_id: apartment.id.clone(),
            name: name.to_owned(),
            category,
            status,
            quantity,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        let sofa = item(&assigned, "Sofa", ItemCategory::Furniture, ItemStatus::Ok, 1);
        let fridge = item(
            &assigned,
            "Fridge",
            ItemCategory::Appliance,
            ItemStatus::Damaged,
            1,
        );
        let bed = item(&vacant, "Bed", ItemCategory::Furniture, ItemStatus::Ok, 2);

        let pending = Inspection {
            id: InspectionId::random(),
            apartment_id: assigned.id.clone(),
            verifier_id: verifier.id.clone(),
            status: InspectionStatus::Pending,
            items: Vec::new(),
            general_notes: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        let completed = Inspection {
            id: InspectionId::random(),
            apartment_id: vacant.id.clone(),
            verifier_id: verifier.id.clone(),
            status: InspectionStatus::Completed,
            items: vec![InspectionItem {
                inventory_item_id: bed.id.clone(),
                status: CheckResult::Ok,
                notes: None,
            }],
            general_notes: Some("Ready for the next tenant".to_owned()),
            completed_at: Some(now),
            created_at: now,
            updated_at: now,
        };

        let owner_assignments = vec![(owner.id.clone(), vec![assigned.id.clone()])];
        let verifier_assignments = vec![(
            verifier.id.clone(),
            vec![assigned.id.clone(), vacant.id.clone()],
        )];

        Self {
            accounts: vec![admin, owner, verifier],
            buildings: vec![harbour, mill],
            apartments: vec![assigned, record_only, vacant, workshop],
            inventory: vec![sofa, fridge, bed],
            inspections: vec![pending, completed],
            owner_assignments,
            verifier_assignments,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn the_scenario_contains_the_ledger_mismatch() {
        let data = ExampleDataSet::generate();
        let owner = data
            .accounts
            .iter()
            .find(|account| account.role == Role::Owner)
            .expect("owner present");

        let owned_on_record: Vec<_> = data
            .apartments
            .iter()
            .filter(|apartment| apartment.owner_id.as_ref() == Some(&owner.id))
            .collect();
        let (_, ledger) = data
            .owner_assignments
            .iter()
            .find(|(user, _)| *user == owner.id)
            .expect("ledger entry present");

        // Two apartments name the owner on the record; only one is granted.
        assert_eq!(owned_on_record.len(), 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn foreign_keys_reference_rows_in_the_set() {
        let data = ExampleDataSet::generate();
        for apartment in &data.apartments {
            assert!(data
                .buildings
                .iter()
                .any(|building| building.id == apartment.building_id));
        }
        for item in &data.inventory {
            assert!(data
                .apartments
                .iter()
                .any(|apartment| apartment.id == item.apartment_id));
        }
        for inspection in &data.inspections {
            assert!(data
                .apartments
                .iter()
                .any(|apartment| apartment.id == inspection.apartment_id));
        }
    }
}
