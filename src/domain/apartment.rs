//! Apartment records.
//!
//! An apartment's `owner_id` is informational only: visibility for owners
//! and verifiers is decided exclusively by the assignment ledgers. The two
//! can disagree, and the access resolver deliberately trusts the ledger
//! (see [`crate::domain::access`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ApartmentId, BuildingId, UserId};

/// Occupancy state of an apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApartmentStatus {
    /// Currently occupied.
    Occupied,
    /// Empty and available.
    Vacant,
    /// Closed for maintenance work.
    Maintenance,
}

/// A single apartment inside a building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    /// Stable identifier.
    pub id: ApartmentId,
    /// Building this apartment belongs to. Dangling references are
    /// tolerated and simply produce empty lookups.
    pub building_id: BuildingId,
    /// Door number, e.g. "4B".
    pub number: String,
    /// Floor, when known.
    pub floor: Option<i16>,
    /// Informational owner reference; grants no access by itself.
    pub owner_id: Option<UserId>,
    /// Occupancy state.
    pub status: ApartmentStatus,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an apartment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApartment {
    /// Building this apartment belongs to.
    pub building_id: BuildingId,
    /// Door number.
    pub number: String,
    /// Floor, when known.
    pub floor: Option<i16>,
    /// Informational owner reference.
    pub owner_id: Option<UserId>,
    /// Occupancy state.
    pub status: ApartmentStatus,
}

/// Shallow-merge update for an apartment. `None` fields are left as-is.
///
/// `floor` and `owner_id` use a double `Option` so a patch can distinguish
/// "leave untouched" from "clear the field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentPatch {
    /// New door number, if changing.
    pub number: Option<String>,
    /// New floor; `Some(None)` clears it.
    pub floor: Option<Option<i16>>,
    /// New informational owner; `Some(None)` clears it.
    pub owner_id: Option<Option<UserId>>,
    /// New occupancy state, if changing.
    pub status: Option<ApartmentStatus>,
}

impl ApartmentPatch {
    /// Merge the set fields into `apartment`.
    pub fn apply_to(self, apartment: &mut Apartment) {
        if let Some(number) = self.number {
            apartment.number = number;
        }
        if let Some(floor) = self.floor {
            apartment.floor = floor;
        }
        if let Some(owner_id) = self.owner_id {
            apartment.owner_id = owner_id;
        }
        if let Some(status) = self.status {
            apartment.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn patch_can_clear_optional_fields() {
        let now = Utc::now();
        let mut apartment = Apartment {
            id: ApartmentId::random(),
            building_id: BuildingId::random(),
            number: "4B".to_owned(),
            floor: Some(4),
            owner_id: Some(UserId::random()),
            status: ApartmentStatus::Occupied,
            created_at: now,
            updated_at: now,
        };

        ApartmentPatch {
            floor: Some(None),
            owner_id: Some(None),
            status: Some(ApartmentStatus::Vacant),
            ..ApartmentPatch::default()
        }
        .apply_to(&mut apartment);

        assert_eq!(apartment.number, "4B");
        assert_eq!(apartment.floor, None);
        assert_eq!(apartment.owner_id, None);
        assert_eq!(apartment.status, ApartmentStatus::Vacant);
    }
}
