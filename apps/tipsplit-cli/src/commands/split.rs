//! # Split Commands
//!
//! Bill amount, tip percentage and the stateless simple split.

use tipsplit_core::{compute_simple_split, SimpleSplit};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{SessionState, SessionSummary};

/// Even split of an arbitrary bill, independent of the session.
///
/// Inputs are clamped by the calculator, so this never fails.
pub fn simple_split(bill: f64, tip_percent: f64, people: i64) -> SimpleSplit {
    debug!(bill, tip_percent, people, "simple_split command");
    compute_simple_split(bill, tip_percent, people)
}

/// Replaces the session's bill amount with newly typed text.
pub fn set_bill(session: &mut SessionState, amount: &str) -> Result<SessionSummary, ApiError> {
    debug!(amount = %amount, "set_bill command");
    session
        .set_bill(amount)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    Ok(session.summary())
}

/// Sets the session's tip percentage (clamped to 0-100).
pub fn set_tip(session: &mut SessionState, tip_percent: f64) -> SessionSummary {
    let applied = session.set_tip_percent(tip_percent);
    debug!(requested = tip_percent, applied, "set_tip command");
    session.summary()
}

/// Current session snapshot.
pub fn summary(session: &SessionState) -> SessionSummary {
    session.summary()
}
