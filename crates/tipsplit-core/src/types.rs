//! # Domain Types
//!
//! Core domain types used throughout Tipsplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Stored (roster)                      Computed (never stored)           │
//! │  ┌─────────────────┐ ┌──────────────┐ ┌─────────────────┐              │
//! │  │  Participant    │ │   BillItem   │ │  SimpleSplit    │              │
//! │  │  ─────────────  │ │ ──────────── │ │  tip_amount     │              │
//! │  │  index (1..=n)  │ │ id (UUID)    │ │  total_bill     │              │
//! │  │  display_name   │ │ name, price  │ │  per_person     │              │
//! │  └─────────────────┘ │ assigned_to  │ └─────────────────┘              │
//! │                      └──────────────┘ ┌─────────────────┐              │
//! │                                       │  ItemizedSplit  │              │
//! │                                       │  total_bill     │              │
//! │                                       │  tip_amount     │              │
//! │                                       │  results ───────┼─► PersonResult
//! │                                       └─────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Participant Identity
//! Participants have no id of their own: the 1-based position in the roster
//! *is* the identity. Deleting participant `k` renumbers everyone after it,
//! and the roster rewrites item assignments in the same step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

/// 1-based participant index.
pub type ParticipantIndex = u32;

// =============================================================================
// Item Id
// =============================================================================

/// Opaque bill item identifier (UUID v4).
///
/// Stable for the item's lifetime; edits keep it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(String);

impl ItemId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        ItemId(Uuid::new_v4().to_string())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

// =============================================================================
// Participant
// =============================================================================

/// One person sharing the bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// 1-based, dense position in the roster.
    pub index: ParticipantIndex,

    /// Name set by the user, if any.
    pub display_name: Option<String>,
}

impl Participant {
    /// Returns the display name, or the generated `"Person {index}"` label.
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => default_label(self.index),
        }
    }
}

/// Label shown for a participant without a name.
pub fn default_label(index: ParticipantIndex) -> String {
    format!("Person {}", index)
}

// =============================================================================
// Bill Item
// =============================================================================

/// A priced line on the bill, shared by the participants in `assigned_to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub id: ItemId,

    /// Display name (stored trimmed).
    pub name: String,

    /// Price in currency units, two decimal places.
    pub price: f64,

    /// Participants sharing this item, ascending.
    pub assigned_to: BTreeSet<ParticipantIndex>,
}

impl BillItem {
    /// Creates an item with a fresh id. No validation happens here; the
    /// roster validates before calling this.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        assigned_to: impl IntoIterator<Item = ParticipantIndex>,
    ) -> Self {
        BillItem {
            id: ItemId::new(),
            name: name.into(),
            price,
            assigned_to: assigned_to.into_iter().collect(),
        }
    }

    /// Each assignee's share of the price. `None` for an unassigned item.
    pub fn price_per_person(&self) -> Option<f64> {
        if self.assigned_to.is_empty() {
            None
        } else {
            Some(self.price / self.assigned_to.len() as f64)
        }
    }

    /// Checks whether the participant shares this item.
    #[inline]
    pub fn is_assigned_to(&self, index: ParticipantIndex) -> bool {
        self.assigned_to.contains(&index)
    }
}

// =============================================================================
// Results
// =============================================================================

/// Simple mode result. Every field is rounded to cents independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSplit {
    pub tip_amount: f64,
    pub total_bill: f64,
    pub per_person: f64,
}

/// One participant's share in itemized mode. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonResult {
    pub person_index: ParticipantIndex,

    /// Sum of this participant's item shares (pre-tip).
    pub base_amount: f64,

    /// `base_amount * tip / 100`.
    pub tip_amount: f64,

    /// `base_amount + tip_amount`.
    pub total_amount: f64,

    /// Items contributing to `base_amount`, in bill order.
    pub items: Vec<BillItem>,
}

impl PersonResult {
    /// A zeroed result for `person_index`.
    pub fn empty(person_index: ParticipantIndex) -> Self {
        PersonResult {
            person_index,
            base_amount: 0.0,
            tip_amount: 0.0,
            total_amount: 0.0,
            items: Vec::new(),
        }
    }
}

/// Itemized mode result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemizedSplit {
    /// Sum of every item price, assigned or not.
    pub subtotal: f64,

    /// Item subtotal plus aggregate tip.
    pub total_bill: f64,

    /// Tip on the full item subtotal.
    pub tip_amount: f64,

    /// One entry per participant, index order.
    pub results: Vec<PersonResult>,
}

impl ItemizedSplit {
    /// Price that reached nobody's base amount (unassigned or stale items).
    ///
    /// Zero, up to float noise, whenever every item has a valid assignee.
    pub fn unallocated_amount(&self) -> f64 {
        let allocated: f64 = self.results.iter().map(|r| r.base_amount).sum();
        self.subtotal - allocated
    }

    /// Looks up a participant's result by 1-based index.
    pub fn person(&self, index: ParticipantIndex) -> Option<&PersonResult> {
        index
            .checked_sub(1)
            .and_then(|i| self.results.get(i as usize))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_label_falls_back() {
        let anon = Participant {
            index: 3,
            display_name: None,
        };
        assert_eq!(anon.label(), "Person 3");

        let named = Participant {
            index: 1,
            display_name: Some("Ana".to_string()),
        };
        assert_eq!(named.label(), "Ana");
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = BillItem::new("Soup", 6.5, [1]);
        let b = BillItem::new("Soup", 6.5, [1]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_assignment_is_a_set() {
        let item = BillItem::new("Fries", 9.0, [2, 1, 2]);
        assert_eq!(item.assigned_to.len(), 2);
        assert_eq!(item.price_per_person(), Some(4.5));
        assert!(item.is_assigned_to(1));
        assert!(!item.is_assigned_to(3));
    }

    #[test]
    fn test_unassigned_item_has_no_share() {
        let item = BillItem::new("Bread", 3.0, Vec::new());
        assert_eq!(item.price_per_person(), None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let split = SimpleSplit {
            tip_amount: 20.0,
            total_bill: 120.0,
            per_person: 30.0,
        };
        let json = serde_json::to_value(split).unwrap();
        assert_eq!(json["perPerson"], 30.0);
        assert_eq!(json["totalBill"], 120.0);
    }

    #[test]
    fn test_person_lookup_is_one_based() {
        let split = ItemizedSplit {
            subtotal: 0.0,
            total_bill: 0.0,
            tip_amount: 0.0,
            results: vec![PersonResult::empty(1), PersonResult::empty(2)],
        };
        assert_eq!(split.person(2).map(|p| p.person_index), Some(2));
        assert!(split.person(0).is_none());
        assert!(split.person(3).is_none());
    }
}
