//! # Roster Commands
//!
//! Participant and item mutations.
//!
//! ## Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   addItem ──────► on the bill ──────► editItem (same id, same slot)     │
//! │                       │                                                 │
//! │                       ├──────────────► deleteItem                       │
//! │                       │                                                 │
//! │                       └──────────────► clearItems (all at once)         │
//! │                                                                         │
//! │   deletePerson may leave an item with no assignees; it stays on the     │
//! │   bill and is listed under `unassignedItems` in the summary.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with a fresh [`SessionSummary`], so the caller
//! re-renders from a single response.

use tipsplit_core::ItemId;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{SessionState, SessionSummary};

pub fn increment_people(session: &mut SessionState) -> Result<SessionSummary, ApiError> {
    debug!("increment_people command");
    session.roster.increment_participants()?;
    Ok(session.summary())
}

pub fn decrement_people(session: &mut SessionState) -> Result<SessionSummary, ApiError> {
    debug!("decrement_people command");
    session.roster.decrement_participants()?;
    Ok(session.summary())
}

pub fn delete_person(session: &mut SessionState, index: u32) -> Result<SessionSummary, ApiError> {
    debug!(index, "delete_person command");
    session.roster.delete_participant(index)?;
    Ok(session.summary())
}

pub fn rename_person(
    session: &mut SessionState,
    index: u32,
    name: &str,
) -> Result<SessionSummary, ApiError> {
    debug!(index, name = %name, "rename_person command");
    session.roster.rename_participant(index, name)?;
    Ok(session.summary())
}

/// Adds an item. An empty `assigned_to` with `all` set assigns everyone,
/// like the "select all" toggle.
pub fn add_item(
    session: &mut SessionState,
    name: &str,
    price: f64,
    assigned_to: Vec<u32>,
    all: bool,
) -> Result<SessionSummary, ApiError> {
    debug!(name = %name, price, all, "add_item command");
    let assigned_to = resolve_assignees(session, assigned_to, all);
    session.roster.add_item(name, price, assigned_to)?;
    Ok(session.summary())
}

pub fn edit_item(
    session: &mut SessionState,
    id: &str,
    name: &str,
    price: f64,
    assigned_to: Vec<u32>,
    all: bool,
) -> Result<SessionSummary, ApiError> {
    debug!(id = %id, name = %name, price, "edit_item command");
    let assigned_to = resolve_assignees(session, assigned_to, all);
    session
        .roster
        .edit_item(&ItemId::from(id), name, price, assigned_to)?;
    Ok(session.summary())
}

pub fn delete_item(session: &mut SessionState, id: &str) -> Result<SessionSummary, ApiError> {
    debug!(id = %id, "delete_item command");
    session.roster.delete_item(&ItemId::from(id))?;
    Ok(session.summary())
}

pub fn clear_items(session: &mut SessionState) -> SessionSummary {
    let removed = session.roster.clear_items();
    debug!(removed, "clear_items command");
    session.summary()
}

fn resolve_assignees(session: &SessionState, assigned_to: Vec<u32>, all: bool) -> Vec<u32> {
    if all && assigned_to.is_empty() {
        session.roster.all_participants().into_iter().collect()
    } else {
        assigned_to
    }
}
