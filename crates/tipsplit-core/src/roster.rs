//! # Roster & Item Store
//!
//! The in-memory participant roster and bill items for itemized mode.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Participant indices are exactly {1, ..., participant_count}         │
//! │  2. Every item assignment names a current participant                   │
//! │  3. participant_count ≥ 1                                               │
//! │  4. Every accepted item has a finite price > 0                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deleting a Participant
//! ```text
//! Before (4 people)                     delete_participant(2)
//! ─────────────────                     ─────────────────────
//! names:  [Ana, Ben, Cy, Di]       ──►  [Ana, Cy, Di]
//! Pizza:  {1, 2}                   ──►  {1}
//! Wine:   {2, 3, 4}                ──►  {2, 3}
//! Salad:  {2}                      ──►  {}   (kept, now unassigned)
//! ```
//!
//! Participants are stored as a dense arena (`Vec<Option<String>>`), so the
//! position in the vector is the index. Every check runs before the first
//! write, so a rejected mutation never leaves partial state behind.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action              Roster Method              Result               │
//! │  ─────────              ─────────────              ──────               │
//! │  [+] people       ───►  increment_participants()   Ok(new count)        │
//! │  [-] people       ───►  decrement_participants()   Ok(new count) / Err  │
//! │  Remove person    ───►  delete_participant(i)      Ok(removed) / Err    │
//! │  Rename person    ───►  rename_participant(i, n)   Ok(()) / Err         │
//! │  Add item         ───►  add_item(..)               Ok(ItemId) / Err     │
//! │  Edit item        ───►  edit_item(id, ..)          Ok(()) / Err         │
//! │  Delete item      ───►  delete_item(id)            Ok(item) / Err       │
//! │  Clear            ───►  clear_items()              number removed       │
//! │                                                                         │
//! │  After any Ok, revision() has advanced; the UI re-runs split().         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::config::SplitConfig;
use crate::error::{CoreError, CoreResult};
use crate::itemized::compute_itemized_split;
use crate::types::{default_label, BillItem, ItemId, ItemizedSplit, Participant, ParticipantIndex};
use crate::validation::{
    clamp_tip_percent, validate_assignment, validate_item_name, validate_participant_name,
    validate_price,
};
use crate::MAX_PARTICIPANTS;

/// Participant roster plus bill items.
///
/// Owned by a single session; all methods are synchronous.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    /// One slot per participant; slot `i` is participant `i + 1`.
    names: Vec<Option<String>>,

    items: Vec<BillItem>,

    max_participants: u32,

    /// Bumped on every applied mutation.
    revision: u64,
}

impl Roster {
    /// Creates a roster with one unnamed participant and no items.
    pub fn new() -> Self {
        Self::with_max_participants(MAX_PARTICIPANTS)
    }

    /// Creates a roster with a custom participant ceiling (at least 1).
    pub fn with_max_participants(max_participants: u32) -> Self {
        Roster {
            names: vec![None],
            items: Vec::new(),
            max_participants: max_participants.max(1),
            revision: 0,
        }
    }

    /// Creates a roster honouring `config.max_participants`.
    pub fn from_config(config: &SplitConfig) -> Self {
        Self::with_max_participants(config.max_participants)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current number of participants (always ≥ 1).
    #[inline]
    pub fn participant_count(&self) -> u32 {
        self.names.len() as u32
    }

    /// Configured participant ceiling.
    #[inline]
    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    /// Number of applied mutations so far.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All participants in index order.
    pub fn participants(&self) -> Vec<Participant> {
        self.names
            .iter()
            .zip(1..)
            .map(|(name, index)| Participant {
                index,
                display_name: name.clone(),
            })
            .collect()
    }

    /// Display name for `index`, falling back to `"Person {index}"`.
    pub fn display_name(&self, index: ParticipantIndex) -> Option<String> {
        let slot = self.slot(index)?;
        Some(
            self.names[slot]
                .clone()
                .unwrap_or_else(|| default_label(index)),
        )
    }

    /// Every current participant index; used to "select all" when assigning.
    pub fn all_participants(&self) -> BTreeSet<ParticipantIndex> {
        (1..=self.participant_count()).collect()
    }

    /// Items in the order they were added.
    #[inline]
    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&BillItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Sum of all item prices.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Items left without any assignee (their participants were deleted).
    pub fn unassigned_items(&self) -> impl Iterator<Item = &BillItem> {
        self.items.iter().filter(|item| item.assigned_to.is_empty())
    }

    /// Runs the itemized split over the current roster.
    ///
    /// `tip_percent` is clamped to `[0, 100]` first.
    pub fn split(&self, tip_percent: f64) -> ItemizedSplit {
        compute_itemized_split(
            &self.items,
            clamp_tip_percent(tip_percent),
            self.participant_count(),
        )
    }

    // =========================================================================
    // Participant Mutations
    // =========================================================================

    /// Adds one unnamed participant at the end of the roster.
    ///
    /// ## Returns
    /// - `Ok(count)` - the new participant count
    /// - `Err(ParticipantLimit)` - already at the ceiling
    pub fn increment_participants(&mut self) -> CoreResult<u32> {
        if self.participant_count() >= self.max_participants {
            debug!(max = self.max_participants, "Rejected increment: roster full");
            return Err(CoreError::ParticipantLimit {
                max: self.max_participants,
            });
        }

        self.names.push(None);
        self.touch();
        debug!(count = self.participant_count(), "Participant added");
        Ok(self.participant_count())
    }

    /// Removes the last participant.
    ///
    /// ## Returns
    /// - `Ok(count)` - the new participant count
    /// - `Err(LastParticipant)` - only one participant left
    /// - `Err(ParticipantAssigned)` - an item is still assigned to the last
    ///   participant; use [`delete_participant`](Self::delete_participant)
    ///   to remove them together with their assignments
    pub fn decrement_participants(&mut self) -> CoreResult<u32> {
        let count = self.participant_count();
        if count <= 1 {
            debug!("Rejected decrement: last participant");
            return Err(CoreError::LastParticipant);
        }

        if self.items.iter().any(|item| item.is_assigned_to(count)) {
            debug!(index = count, "Rejected decrement: participant has items");
            return Err(CoreError::ParticipantAssigned { index: count });
        }

        self.names.pop();
        self.touch();
        debug!(count = self.participant_count(), "Participant removed from end");
        Ok(self.participant_count())
    }

    /// Deletes participant `index`, renumbering everyone after it.
    ///
    /// ## Effects (all or nothing)
    /// 1. The participant's name slot is dropped; later names shift down.
    /// 2. `index` is removed from every item's assignment.
    /// 3. Every assignment entry above `index` is decremented.
    ///
    /// Items whose only assignee was `index` stay on the bill with an empty
    /// assignment; see [`unassigned_items`](Self::unassigned_items).
    ///
    /// ## Returns
    /// The removed participant as it was before deletion.
    pub fn delete_participant(&mut self, index: ParticipantIndex) -> CoreResult<Participant> {
        let count = self.participant_count();
        if count <= 1 {
            debug!(index, "Rejected delete: last participant");
            return Err(CoreError::LastParticipant);
        }
        let slot = self.require_slot(index)?;

        let removed = Participant {
            index,
            display_name: self.names.remove(slot),
        };

        for item in &mut self.items {
            item.assigned_to = item
                .assigned_to
                .iter()
                .filter(|&&assignee| assignee != index)
                .map(|&assignee| if assignee > index { assignee - 1 } else { assignee })
                .collect();
        }

        self.touch();
        debug!(
            index,
            count = self.participant_count(),
            unassigned = self.unassigned_items().count(),
            "Participant deleted"
        );
        Ok(removed)
    }

    /// Sets the display name for `index`.
    ///
    /// The name is trimmed; a blank name is rejected and the previous name
    /// is kept.
    pub fn rename_participant(&mut self, index: ParticipantIndex, name: &str) -> CoreResult<()> {
        let slot = self.require_slot(index)?;
        let name = validate_participant_name(name)?;

        debug!(index, name = %name, "Participant renamed");
        self.names[slot] = Some(name);
        self.touch();
        Ok(())
    }

    // =========================================================================
    // Item Mutations
    // =========================================================================

    /// Appends a new item.
    ///
    /// ## Rules
    /// - `name` must not be blank (stored trimmed)
    /// - `price` must be finite and > 0
    /// - `assigned_to` must name at least one current participant, and only
    ///   current participants
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::Roster;
    ///
    /// let mut roster = Roster::new();
    /// let id = roster.add_item("Tacos", 14.0, [1]).unwrap();
    /// assert_eq!(roster.item(&id).unwrap().name, "Tacos");
    ///
    /// // Participant 2 doesn't exist yet
    /// assert!(roster.add_item("Beer", 6.0, [2]).is_err());
    /// ```
    pub fn add_item(
        &mut self,
        name: &str,
        price: f64,
        assigned_to: impl IntoIterator<Item = ParticipantIndex>,
    ) -> CoreResult<ItemId> {
        let (name, assigned_to) = self.validate_item(name, price, assigned_to)?;

        let item = BillItem::new(name, price, assigned_to);
        let id = item.id.clone();
        debug!(id = %id, name = %item.name, price, "Item added");

        self.items.push(item);
        self.touch();
        Ok(id)
    }

    /// Replaces an item's name, price and assignment, keeping its id and
    /// position. Same rules as [`add_item`](Self::add_item).
    pub fn edit_item(
        &mut self,
        id: &ItemId,
        name: &str,
        price: f64,
        assigned_to: impl IntoIterator<Item = ParticipantIndex>,
    ) -> CoreResult<()> {
        let position = self.require_item(id)?;
        let (name, assigned_to) = self.validate_item(name, price, assigned_to)?;

        debug!(id = %id, name = %name, price, "Item edited");
        let item = &mut self.items[position];
        item.name = name;
        item.price = price;
        item.assigned_to = assigned_to;
        self.touch();
        Ok(())
    }

    /// Removes an item and returns it.
    pub fn delete_item(&mut self, id: &ItemId) -> CoreResult<BillItem> {
        let position = self.require_item(id)?;

        let removed = self.items.remove(position);
        self.touch();
        debug!(id = %id, "Item deleted");
        Ok(removed)
    }

    /// Removes every item; participants and names are untouched.
    ///
    /// ## Returns
    /// How many items were removed. Clearing an empty bill is a no-op and
    /// does not advance the revision.
    pub fn clear_items(&mut self) -> usize {
        let removed = self.items.len();
        if removed > 0 {
            self.items.clear();
            self.touch();
            debug!(removed, "Items cleared");
        }
        removed
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn slot(&self, index: ParticipantIndex) -> Option<usize> {
        if index >= 1 && index <= self.participant_count() {
            Some((index - 1) as usize)
        } else {
            None
        }
    }

    fn require_slot(&self, index: ParticipantIndex) -> CoreResult<usize> {
        self.slot(index).ok_or(CoreError::ParticipantNotFound {
            index,
            count: self.participant_count(),
        })
    }

    fn require_item(&self, id: &ItemId) -> CoreResult<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    fn validate_item(
        &self,
        name: &str,
        price: f64,
        assigned_to: impl IntoIterator<Item = ParticipantIndex>,
    ) -> CoreResult<(String, BTreeSet<ParticipantIndex>)> {
        let name = validate_item_name(name)?;
        validate_price(price)?;
        let assigned_to: BTreeSet<ParticipantIndex> = assigned_to.into_iter().collect();
        validate_assignment(&assigned_to, self.participant_count())?;
        Ok((name, assigned_to))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn roster_with(count: u32) -> Roster {
        let mut roster = Roster::new();
        for _ in 1..count {
            roster.increment_participants().unwrap();
        }
        roster
    }

    fn assigned(roster: &Roster, id: &ItemId) -> Vec<u32> {
        roster.item(id).unwrap().assigned_to.iter().copied().collect()
    }

    /// Every assignment names a live participant, or is empty.
    fn assert_consistent(roster: &Roster) {
        let count = roster.participant_count();
        assert!(count >= 1);
        for item in roster.items() {
            assert!(item.assigned_to.iter().all(|&i| i >= 1 && i <= count));
        }
        let indices: Vec<u32> = roster.participants().iter().map(|p| p.index).collect();
        assert_eq!(indices, (1..=count).collect::<Vec<_>>());
    }

    #[test]
    fn test_new_roster() {
        let roster = Roster::new();
        assert_eq!(roster.participant_count(), 1);
        assert_eq!(roster.max_participants(), 20);
        assert!(roster.items().is_empty());
        assert_eq!(roster.display_name(1).as_deref(), Some("Person 1"));
        assert_eq!(roster.display_name(2), None);
    }

    #[test]
    fn test_increment_stops_at_ceiling() {
        let mut roster = Roster::with_max_participants(3);
        assert_eq!(roster.increment_participants(), Ok(2));
        assert_eq!(roster.increment_participants(), Ok(3));
        assert_eq!(
            roster.increment_participants(),
            Err(CoreError::ParticipantLimit { max: 3 })
        );
        assert_eq!(roster.participant_count(), 3);
    }

    #[test]
    fn test_from_config_uses_ceiling() {
        let config = SplitConfig {
            max_participants: 2,
            ..SplitConfig::default()
        };
        let mut roster = Roster::from_config(&config);
        roster.increment_participants().unwrap();
        assert!(roster.increment_participants().is_err());
    }

    #[test]
    fn test_decrement_refuses_last_participant() {
        let mut roster = Roster::new();
        assert_eq!(roster.decrement_participants(), Err(CoreError::LastParticipant));
        assert_eq!(roster.participant_count(), 1);
    }

    #[test]
    fn test_decrement_refuses_when_last_participant_is_assigned() {
        let mut roster = roster_with(3);
        roster.add_item("Dessert", 9.0, [3]).unwrap();

        assert_eq!(
            roster.decrement_participants(),
            Err(CoreError::ParticipantAssigned { index: 3 })
        );
        assert_eq!(roster.participant_count(), 3);

        // Assignments to lower indices don't block
        let mut roster = roster_with(3);
        roster.add_item("Soup", 5.0, [1, 2]).unwrap();
        assert_eq!(roster.decrement_participants(), Ok(2));
    }

    #[test]
    fn test_decrement_drops_last_name() {
        let mut roster = roster_with(2);
        roster.rename_participant(2, "Bo").unwrap();
        roster.decrement_participants().unwrap();
        roster.increment_participants().unwrap();
        assert_eq!(roster.display_name(2).as_deref(), Some("Person 2"));
    }

    #[test]
    fn test_delete_participant_reindexes_names_and_items() {
        let mut roster = roster_with(4);
        for (index, name) in [(1, "Ana"), (2, "Ben"), (3, "Cy"), (4, "Di")] {
            roster.rename_participant(index, name).unwrap();
        }
        let pizza = roster.add_item("Pizza", 24.0, [1, 2]).unwrap();
        let wine = roster.add_item("Wine", 30.0, [2, 3, 4]).unwrap();
        let salad = roster.add_item("Salad", 8.0, [2]).unwrap();
        let fries = roster.add_item("Fries", 6.0, [1, 4]).unwrap();

        let removed = roster.delete_participant(2).unwrap();
        assert_eq!(removed.display_name.as_deref(), Some("Ben"));

        assert_eq!(roster.participant_count(), 3);
        let names: Vec<String> = roster.participants().iter().map(|p| p.label()).collect();
        assert_eq!(names, vec!["Ana", "Cy", "Di"]);

        assert_eq!(assigned(&roster, &pizza), vec![1]);
        assert_eq!(assigned(&roster, &wine), vec![2, 3]);
        assert_eq!(assigned(&roster, &salad), Vec::<u32>::new());
        assert_eq!(assigned(&roster, &fries), vec![1, 3]);

        let unassigned: Vec<&ItemId> = roster.unassigned_items().map(|i| &i.id).collect();
        assert_eq!(unassigned, vec![&salad]);
        assert_consistent(&roster);
    }

    #[test]
    fn test_delete_every_position() {
        for k in 1..=5 {
            let mut roster = roster_with(5);
            let all = roster.add_item("Platter", 50.0, roster.all_participants()).unwrap();
            let above = roster.add_item("Cake", 10.0, [5]).unwrap();

            roster.delete_participant(k).unwrap();

            assert_eq!(roster.participant_count(), 4);
            assert_eq!(assigned(&roster, &all), vec![1, 2, 3, 4]);
            let expected_cake: Vec<u32> = if k == 5 { vec![] } else { vec![4] };
            assert_eq!(assigned(&roster, &above), expected_cake);
            assert_consistent(&roster);
        }
    }

    #[test]
    fn test_delete_participant_refuses_last() {
        let mut roster = Roster::new();
        roster.add_item("Coffee", 3.0, [1]).unwrap();
        let before = roster.clone();

        assert_eq!(roster.delete_participant(1), Err(CoreError::LastParticipant));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_delete_unknown_participant_leaves_state() {
        let mut roster = roster_with(2);
        roster.add_item("Tea", 2.0, [2]).unwrap();
        let before = roster.clone();

        assert_eq!(
            roster.delete_participant(3),
            Err(CoreError::ParticipantNotFound { index: 3, count: 2 })
        );
        assert!(roster.delete_participant(0).is_err());
        assert_eq!(roster, before);
    }

    #[test]
    fn test_rename_trims_and_rejects_blank() {
        let mut roster = roster_with(2);
        roster.rename_participant(2, "  Kim ").unwrap();
        assert_eq!(roster.display_name(2).as_deref(), Some("Kim"));

        let err = roster.rename_participant(2, "   ").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));
        assert_eq!(roster.display_name(2).as_deref(), Some("Kim"));

        assert!(roster.rename_participant(5, "Lee").is_err());
    }

    #[test]
    fn test_add_item_validation() {
        let mut roster = roster_with(2);

        assert!(roster.add_item("", 5.0, [1]).is_err());
        assert!(roster.add_item("Juice", 0.0, [1]).is_err());
        assert!(roster.add_item("Juice", -2.0, [1]).is_err());
        assert!(roster.add_item("Juice", f64::NAN, [1]).is_err());
        assert!(roster.add_item("Juice", f64::INFINITY, [1]).is_err());
        assert!(roster.add_item("Juice", 5.0, Vec::new()).is_err());
        assert!(roster.add_item("Juice", 5.0, [3]).is_err());
        assert!(roster.items().is_empty());
        assert_eq!(roster.revision(), 1);

        let id = roster.add_item(" Juice ", 5.0, [2, 1, 2]).unwrap();
        let item = roster.item(&id).unwrap();
        assert_eq!(item.name, "Juice");
        assert_eq!(assigned(&roster, &id), vec![1, 2]);
    }

    #[test]
    fn test_edit_item_keeps_id_and_position() {
        let mut roster = roster_with(2);
        let first = roster.add_item("Nachos", 11.0, [1]).unwrap();
        let second = roster.add_item("Wings", 13.0, [2]).unwrap();

        roster.edit_item(&first, "Loaded Nachos", 14.5, [1, 2]).unwrap();

        assert_eq!(roster.items()[0].id, first);
        assert_eq!(roster.items()[0].name, "Loaded Nachos");
        assert_eq!(roster.items()[0].price, 14.5);
        assert_eq!(assigned(&roster, &first), vec![1, 2]);
        assert_eq!(roster.items()[1].id, second);
    }

    #[test]
    fn test_edit_item_rejections_leave_item_untouched() {
        let mut roster = Roster::new();
        let id = roster.add_item("Bagel", 4.0, [1]).unwrap();
        let before = roster.clone();

        assert!(roster.edit_item(&id, "Bagel", -1.0, [1]).is_err());
        assert!(roster.edit_item(&id, " ", 4.0, [1]).is_err());
        assert!(roster.edit_item(&id, "Bagel", 4.0, Vec::new()).is_err());
        assert!(matches!(
            roster.edit_item(&ItemId::from("missing"), "Bagel", 4.0, [1]),
            Err(CoreError::ItemNotFound(_))
        ));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_delete_item() {
        let mut roster = Roster::new();
        let keep = roster.add_item("Rice", 3.0, [1]).unwrap();
        let drop = roster.add_item("Curry", 12.0, [1]).unwrap();

        let removed = roster.delete_item(&drop).unwrap();
        assert_eq!(removed.name, "Curry");
        assert_eq!(roster.items().len(), 1);
        assert_eq!(roster.items()[0].id, keep);

        assert!(matches!(roster.delete_item(&drop), Err(CoreError::ItemNotFound(_))));
    }

    #[test]
    fn test_clear_items_is_idempotent() {
        let mut roster = roster_with(2);
        roster.rename_participant(1, "Jo").unwrap();
        roster.add_item("Pho", 12.0, [1]).unwrap();
        roster.add_item("Banh mi", 8.0, [2]).unwrap();

        assert_eq!(roster.clear_items(), 2);
        let after_once = roster.clone();
        assert_eq!(roster.clear_items(), 0);

        assert!(roster.items().is_empty());
        assert_eq!(roster, after_once);
        assert_eq!(roster.participant_count(), 2);
        assert_eq!(roster.display_name(1).as_deref(), Some("Jo"));
    }

    #[test]
    fn test_revision_tracks_applied_mutations() {
        let mut roster = Roster::with_max_participants(2);
        assert_eq!(roster.revision(), 0);

        roster.increment_participants().unwrap();
        assert_eq!(roster.revision(), 1);

        let _ = roster.increment_participants();
        let _ = roster.rename_participant(1, "");
        assert_eq!(roster.revision(), 1);

        let id = roster.add_item("Gyoza", 7.0, [2]).unwrap();
        roster.delete_item(&id).unwrap();
        assert_eq!(roster.revision(), 3);
    }

    #[test]
    fn test_split_uses_roster_and_clamps_tip() {
        let mut roster = roster_with(2);
        roster.add_item("Pizza", 30.0, [1]).unwrap();
        roster.add_item("Wine", 20.0, [1, 2]).unwrap();

        let split = roster.split(10.0);
        assert_eq!(split.results[0].base_amount, 40.0);
        assert_eq!(split.results[1].base_amount, 10.0);
        assert_eq!(split.total_bill, 55.0);
        assert_eq!(roster.items_total(), 50.0);

        let capped = roster.split(400.0);
        assert_eq!(capped.tip_amount, 50.0);
    }

    #[test]
    fn test_split_after_delete_moves_shares() {
        let mut roster = roster_with(3);
        roster.add_item("Shared", 30.0, [1, 2, 3]).unwrap();
        roster.add_item("Solo", 12.0, [3]).unwrap();

        roster.delete_participant(2).unwrap();
        let split = roster.split(0.0);

        assert_eq!(split.results.len(), 2);
        assert_eq!(split.results[0].base_amount, 15.0);
        assert_eq!(split.results[1].base_amount, 27.0);
        assert!(split.unallocated_amount().abs() < 1e-9);
    }
}
