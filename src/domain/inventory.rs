//! Inventory item records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ApartmentId, ItemId};

/// Closed set of inventory categories shown by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Sofas, tables, beds.
    Furniture,
    /// Fridges, washing machines, ovens.
    Appliance,
    /// Televisions, routers.
    Electronics,
    /// Plates, pans, cutlery.
    Kitchenware,
    /// Bedding and towels.
    Linens,
    /// Lamps, taps, built-in fittings.
    Fixture,
    /// Anything that fits no other category.
    Other,
}

/// Condition of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Present and serviceable.
    Ok,
    /// Present but damaged.
    Damaged,
    /// Not found in the apartment.
    Missing,
    /// Worn out and due for replacement.
    NeedsReplacement,
}

/// A single tracked item inside an apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Stable identifier.
    pub id: ItemId,
    /// Apartment the item belongs to. Dangling references are tolerated.
    pub apartment_id: ApartmentId,
    /// Display name.
    pub name: String,
    /// Category bucket.
    pub category: ItemCategory,
    /// Current condition.
    pub status: ItemStatus,
    /// Number of units.
    pub quantity: u32,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    /// Apartment the item belongs to.
    pub apartment_id: ApartmentId,
    /// Display name.
    pub name: String,
    /// Category bucket.
    pub category: ItemCategory,
    /// Current condition.
    pub status: ItemStatus,
    /// Number of units.
    pub quantity: u32,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Shallow-merge update for an inventory item. `None` fields are left
/// as-is; `notes` uses a double `Option` so it can be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemPatch {
    /// New display name, if changing.
    pub name: Option<String>,
    /// New category, if changing.
    pub category: Option<ItemCategory>,
    /// New condition, if changing.
    pub status: Option<ItemStatus>,
    /// New unit count, if changing.
    pub quantity: Option<u32>,
    /// New notes; `Some(None)` clears them.
    pub notes: Option<Option<String>>,
}

impl InventoryItemPatch {
    /// Merge the set fields into `item`.
    pub fn apply_to(self, item: &mut InventoryItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(notes) = self.notes {
            item.notes = notes;
        }
    }
}
