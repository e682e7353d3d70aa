//! Building records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::BuildingId;

/// A managed building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    /// Stable identifier.
    pub id: BuildingId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Declared apartment capacity. Not reconciled against actual
    /// apartment rows; the dashboard shows it as-is.
    pub total_apartments: u32,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a building.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBuilding {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Declared apartment capacity.
    pub total_apartments: u32,
}

/// Shallow-merge update for a building. `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPatch {
    /// New display name, if changing.
    pub name: Option<String>,
    /// New street address, if changing.
    pub address: Option<String>,
    /// New declared capacity, if changing.
    pub total_apartments: Option<u32>,
}

impl BuildingPatch {
    /// Merge the set fields into `building`.
    pub fn apply_to(self, building: &mut Building) {
        if let Some(name) = self.name {
            building.name = name;
        }
        if let Some(address) = self.address {
            building.address = address;
        }
        if let Some(total) = self.total_apartments {
            building.total_apartments = total;
        }
    }
}
