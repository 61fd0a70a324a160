//! # Itemized Split Engine
//!
//! Itemized mode: each line item is shared by the participants it is
//! assigned to, and each participant tips on their own share.
//!
//! ## Allocation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Items                               People (participant_count = 2)     │
//! │  ─────                               ──────                             │
//! │  Pizza  $30 → [1]        ──────────► P1 base += 30                      │
//! │  Wine   $20 → [1, 2]     ──┬───────► P1 base += 10                      │
//! │                            └───────► P2 base += 10                      │
//! │                                                                         │
//! │  tip 10%:  P1 40 + 4 = 44   P2 10 + 1 = 11                              │
//! │  aggregate: subtotal 50, tip 5, total 55                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - An item's price is divided by the size of *its* assignment, not by the
//!   participant count.
//! - Assignees outside `1..=participant_count` are skipped; their share is
//!   lost from the per-person totals but still counted in the aggregate.
//! - Nothing is rounded here. Display code rounds.

use tracing::trace;

use crate::types::{BillItem, ItemizedSplit, PersonResult};

/// Computes per-participant shares and aggregate totals for itemized mode.
///
/// `tip_percent` is used as given; callers clamp it first (the roster's
/// [`split`](crate::roster::Roster::split) does).
///
/// ## Example
/// ```rust
/// use tipsplit_core::compute_itemized_split;
/// use tipsplit_core::types::BillItem;
///
/// let items = vec![
///     BillItem::new("Pizza", 30.0, [1]),
///     BillItem::new("Wine", 20.0, [1, 2]),
/// ];
/// let split = compute_itemized_split(&items, 10.0, 2);
///
/// assert_eq!(split.results[0].base_amount, 40.0);
/// assert_eq!(split.results[1].base_amount, 10.0);
/// assert_eq!(split.tip_amount, 5.0);
/// assert_eq!(split.total_bill, 55.0);
/// ```
pub fn compute_itemized_split(
    items: &[BillItem],
    tip_percent: f64,
    participant_count: u32,
) -> ItemizedSplit {
    let mut results: Vec<PersonResult> = (1..=participant_count).map(PersonResult::empty).collect();
    let mut subtotal = 0.0;

    for item in items {
        subtotal += item.price;

        let Some(price_per_person) = item.price_per_person() else {
            trace!(item = %item.id, "Item has no assignees");
            continue;
        };

        for &index in &item.assigned_to {
            // Stale index from a shrunk roster
            if index == 0 || index > participant_count {
                trace!(item = %item.id, index, "Skipping assignee outside roster");
                continue;
            }
            let person = &mut results[(index - 1) as usize];
            person.base_amount += price_per_person;
            person.items.push(item.clone());
        }
    }

    for person in &mut results {
        person.tip_amount = person.base_amount * tip_percent / 100.0;
        person.total_amount = person.base_amount + person.tip_amount;
    }

    let tip_amount = subtotal * tip_percent / 100.0;

    ItemizedSplit {
        subtotal,
        total_bill: subtotal + tip_amount,
        tip_amount,
        results,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, assigned_to: &[u32]) -> BillItem {
        BillItem::new("Item", price, assigned_to.iter().copied())
    }

    #[test]
    fn test_shared_and_solo_items() {
        let items = vec![item(30.0, &[1]), item(20.0, &[1, 2])];
        let split = compute_itemized_split(&items, 10.0, 2);

        assert_eq!(split.results.len(), 2);
        assert_eq!(split.results[0].base_amount, 40.0);
        assert_eq!(split.results[1].base_amount, 10.0);
        assert_eq!(split.results[0].tip_amount, 4.0);
        assert_eq!(split.results[0].total_amount, 44.0);
        assert_eq!(split.results[1].total_amount, 11.0);

        assert_eq!(split.subtotal, 50.0);
        assert_eq!(split.tip_amount, 5.0);
        assert_eq!(split.total_bill, 55.0);
    }

    #[test]
    fn test_results_cover_every_participant() {
        let items = vec![item(12.0, &[2])];
        let split = compute_itemized_split(&items, 0.0, 4);

        let indices: Vec<u32> = split.results.iter().map(|r| r.person_index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(split.results[0].base_amount, 0.0);
        assert!(split.results[0].items.is_empty());
        assert_eq!(split.results[1].base_amount, 12.0);
    }

    #[test]
    fn test_item_lists_follow_bill_order() {
        let first = item(5.0, &[1]);
        let second = item(7.0, &[1, 2]);
        let items = vec![first.clone(), second.clone()];
        let split = compute_itemized_split(&items, 15.0, 2);

        let ids: Vec<_> = split.results[0].items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![first.id, second.id.clone()]);
        assert_eq!(split.results[1].items[0].id, second.id);
    }

    #[test]
    fn test_stale_assignment_is_lost_from_people_but_not_total() {
        // Participant 3 no longer exists
        let items = vec![item(30.0, &[3]), item(10.0, &[1])];
        let split = compute_itemized_split(&items, 10.0, 2);

        assert_eq!(split.results[0].base_amount, 10.0);
        assert_eq!(split.results[1].base_amount, 0.0);
        assert_eq!(split.subtotal, 40.0);
        assert_eq!(split.tip_amount, 4.0);
        assert_eq!(split.total_bill, 44.0);
        assert_eq!(split.unallocated_amount(), 30.0);
    }

    #[test]
    fn test_partially_stale_assignment_keeps_divisor() {
        // Divided by the assignment size (2), then one half is dropped
        let items = vec![item(20.0, &[1, 5])];
        let split = compute_itemized_split(&items, 0.0, 2);

        assert_eq!(split.results[0].base_amount, 10.0);
        assert_eq!(split.unallocated_amount(), 10.0);
    }

    #[test]
    fn test_unassigned_item_only_counts_in_aggregate() {
        let items = vec![BillItem::new("Bread", 4.0, Vec::new())];
        let split = compute_itemized_split(&items, 25.0, 1);

        assert_eq!(split.results[0].base_amount, 0.0);
        assert_eq!(split.total_bill, 5.0);
    }

    fn shares_sum(price: f64, size: u32) -> f64 {
        let assignees: Vec<u32> = (1..=size).collect();
        let split = compute_itemized_split(&[item(price, &assignees)], 0.0, size);
        split.results.iter().map(|r| r.base_amount).sum()
    }

    #[test]
    fn test_item_price_is_conserved_exactly() {
        // shares are exact in binary, so the sum is too
        for (price, size) in [(10.0, 4u32), (7.5, 3), (9.0, 3), (0.75, 3), (6.4, 2), (1.0, 1)] {
            assert_eq!(shares_sum(price, size), price, "price {price} split {size} ways");
        }
    }

    #[test]
    fn test_item_price_is_conserved_within_float_error() {
        // shares such as 99.99 / 5 are rounded to the nearest double, so
        // the sum may be off by a few ulps
        for (price, size) in [(99.99, 5u32), (0.1, 3), (13.37, 3)] {
            let sum = shares_sum(price, size);
            assert!((sum - price).abs() < 1e-9, "price {price} split {size} ways summed to {sum}");
        }
    }

    #[test]
    fn test_no_items() {
        let split = compute_itemized_split(&[], 20.0, 3);
        assert_eq!(split.total_bill, 0.0);
        assert_eq!(split.tip_amount, 0.0);
        assert!(split.results.iter().all(|r| r.total_amount == 0.0));
    }

    #[test]
    fn test_deterministic() {
        let items = vec![item(13.37, &[1, 2, 3]), item(8.2, &[2])];
        let a = compute_itemized_split(&items, 18.0, 3);
        let b = compute_itemized_split(&items, 18.0, 3);
        assert_eq!(a, b);
    }
}
