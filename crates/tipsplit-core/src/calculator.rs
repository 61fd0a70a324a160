//! # Tip Calculator
//!
//! Simple mode: one bill amount, one tip percentage, split evenly.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bill ──clamp──► bill ≥ 0                                               │
//! │  tip % ─clamp──► 0 ≤ tip ≤ 100                                          │
//! │  people ─clamp─► people ≥ 1                                             │
//! │                                                                         │
//! │  tip_amount = bill × tip / 100          ──► round to cents              │
//! │  total_bill = bill + tip_amount          ──► round to cents              │
//! │  per_person = total_bill / people        ──► round to cents              │
//! │                                                                         │
//! │  Each value is rounded from its UNROUNDED inputs, so                    │
//! │  bill + tip_amount may differ from total_bill by half a cent.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::{format_currency, round_to_cents};
use crate::types::SimpleSplit;
use crate::validation::{clamp_bill, clamp_participant_count, clamp_tip_percent};

/// Computes tip, total and per-person share for an even split.
///
/// Out-of-range inputs are clamped, never rejected; see the
/// [`validation`](crate::validation) clamps.
///
/// ## Example
/// ```rust
/// use tipsplit_core::calculator::compute_simple_split;
///
/// let split = compute_simple_split(100.0, 20.0, 4);
/// assert_eq!(split.tip_amount, 20.0);
/// assert_eq!(split.total_bill, 120.0);
/// assert_eq!(split.per_person, 30.0);
/// ```
pub fn compute_simple_split(bill: f64, tip_percent: f64, participant_count: i64) -> SimpleSplit {
    let bill = clamp_bill(bill);
    let tip_percent = clamp_tip_percent(tip_percent);
    let people = clamp_participant_count(participant_count);

    let tip_amount = bill * tip_percent / 100.0;
    let total_bill = bill + tip_amount;
    let per_person = total_bill / people as f64;

    SimpleSplit {
        tip_amount: round_to_cents(tip_amount),
        total_bill: round_to_cents(total_bill),
        per_person: round_to_cents(per_person),
    }
}

/// Formats the tip on `bill` for a quick preview next to a preset chip.
///
/// Inputs are used as given, without clamping.
///
/// ## Example
/// ```rust
/// use tipsplit_core::calculator::tip_amount_label;
///
/// assert_eq!(tip_amount_label(80.0, 15.0), "$12.00");
/// ```
pub fn tip_amount_label(bill: f64, tip_percent: f64) -> String {
    format_currency(bill * tip_percent / 100.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
