//! Inspection records.
//!
//! An inspection is a verifier's snapshot of per-item condition checks for
//! one apartment. Items keep the order the verifier recorded them in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ApartmentId, InspectionId, ItemId, UserId};

/// Lifecycle state of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    /// Opened but not yet finished.
    Pending,
    /// Finished with recorded findings.
    Completed,
    /// Abandoned without findings.
    Cancelled,
}

impl InspectionStatus {
    /// Whether this state admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Condition recorded for a single inventory item during an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    /// Item found in acceptable condition.
    Ok,
    /// Item found with a problem worth flagging.
    Issue,
    /// Item not found.
    Missing,
}

/// One per-item finding inside an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionItem {
    /// Inventory item that was checked. Dangling references are tolerated.
    pub inventory_item_id: ItemId,
    /// Recorded condition.
    pub status: CheckResult,
    /// Free-form notes on this item.
    pub notes: Option<String>,
}

/// A condition-check snapshot taken by a verifier for one apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// Stable identifier.
    pub id: InspectionId,
    /// Apartment that was inspected.
    pub apartment_id: ApartmentId,
    /// Verifier who took the snapshot.
    pub verifier_id: UserId,
    /// Lifecycle state.
    pub status: InspectionStatus,
    /// Ordered per-item findings.
    pub items: Vec<InspectionItem>,
    /// Free-form notes covering the whole visit.
    pub general_notes: Option<String>,
    /// Set when the inspection reaches `Completed`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

/// Input for opening an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInspection {
    /// Apartment to inspect.
    pub apartment_id: ApartmentId,
    /// Verifier opening the inspection.
    pub verifier_id: UserId,
    /// Findings recorded so far, usually empty at creation.
    #[serde(default)]
    pub items: Vec<InspectionItem>,
    /// Free-form notes covering the whole visit.
    pub general_notes: Option<String>,
}

/// Shallow-merge update for an inspection. `None` fields are left as-is.
///
/// Status transitions go through the dedicated complete/cancel operations
/// on the service, not through this patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionPatch {
    /// Replacement findings list, if changing.
    pub items: Option<Vec<InspectionItem>>,
    /// New general notes; `Some(None)` clears them.
    pub general_notes: Option<Option<String>>,
}

impl InspectionPatch {
    /// Merge the set fields into `inspection`.
    pub fn apply_to(self, inspection: &mut Inspection) {
        if let Some(items) = self.items {
            inspection.items = items;
        }
        if let Some(general_notes) = self.general_notes {
            inspection.general_notes = general_notes;
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(InspectionStatus::Pending, false)]
    #[case(InspectionStatus::Completed, true)]
    #[case(InspectionStatus::Cancelled, true)]
    fn terminal_states(#[case] status: InspectionStatus, #[case] expected: bool) {
        assert_eq!(status.is_terminal(), expected);
    }

    #[test]
    fn items_preserve_recorded_order() {
        let first = ItemId::random();
        let second = ItemId::random();
        let inspection = Inspection {
            id: InspectionId::random(),
            apartment_id: ApartmentId::random(),
            verifier_id: UserId::random(),
            status: InspectionStatus::Pending,
            items: vec![
                InspectionItem {
                    inventory_item_id: first.clone(),
                    status: CheckResult::Ok,
                    notes: None,
                },
                InspectionItem {
                    inventory_item_id: second.clone(),
                    status: CheckResult::Missing,
                    notes: Some("not in the apartment".to_owned()),
                },
            ],
            general_notes: None,
            completed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&inspection).expect("inspection serialises");
        let back: Inspection = serde_json::from_str(&json).expect("inspection parses");
        assert_eq!(back.items[0].inventory_item_id, first);
        assert_eq!(back.items[1].inventory_item_id, second);
    }
}
