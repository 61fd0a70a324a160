//! # Validation Module
//!
//! Input clamping and mutation validation for Tipsplit.
//!
//! ## Two Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Policies                                │
//! │                                                                         │
//! │  Calculation inputs (bill, tip %, people)                              │
//! │  ├── CLAMPED into range, never rejected                                │
//! │  └── NaN / infinite bill → 0, NaN tip → 0                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │     always produces a number                                           │
//! │                                                                         │
//! │  Roster mutations (item name, price, assignment, participant name)     │
//! │  ├── REJECTED with a ValidationError                                   │
//! │  └── state is left untouched                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::validation::{clamp_tip_percent, validate_price};
//!
//! assert_eq!(clamp_tip_percent(140.0), 100.0);
//! assert!(validate_price(0.0).is_err());
//! ```

use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::types::ParticipantIndex;
use crate::MAX_TIP_PERCENT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Clamping (calculation inputs)
// =============================================================================

/// Clamps a bill amount to `[0, ∞)`. Non-finite input becomes 0.
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::clamp_bill;
///
/// assert_eq!(clamp_bill(-100.0), 0.0);
/// assert_eq!(clamp_bill(f64::NAN), 0.0);
/// assert_eq!(clamp_bill(42.5), 42.5);
/// ```
#[inline]
pub fn clamp_bill(bill: f64) -> f64 {
    if bill.is_finite() {
        bill.max(0.0)
    } else {
        0.0
    }
}

/// Clamps a tip percentage to `[0, 100]`. NaN becomes 0.
#[inline]
pub fn clamp_tip_percent(tip_percent: f64) -> f64 {
    if tip_percent.is_nan() {
        0.0
    } else {
        tip_percent.clamp(0.0, MAX_TIP_PERCENT)
    }
}

/// Clamps a participant count to at least 1.
#[inline]
pub fn clamp_participant_count(count: i64) -> u32 {
    count.clamp(1, u32::MAX as i64) as u32
}

// =============================================================================
// Mutation Validators
// =============================================================================

/// Validates a bill item name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Returns
/// The trimmed name.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a participant display name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Returns
/// The trimmed name.
pub fn validate_participant_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "participant name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a bill item price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be strictly positive
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::validate_price;
///
/// assert!(validate_price(12.99).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an item assignment against the current roster size.
///
/// ## Rules
/// - Must name at least one participant
/// - Every index must lie in `[1, participant_count]`
pub fn validate_assignment(
    assigned_to: &BTreeSet<ParticipantIndex>,
    participant_count: u32,
) -> ValidationResult<()> {
    if assigned_to.is_empty() {
        return Err(ValidationError::Required {
            field: "assigned_to".to_string(),
        });
    }

    let out_of_range = assigned_to
        .iter()
        .any(|&index| index == 0 || index > participant_count);
    if out_of_range {
        return Err(ValidationError::OutOfRange {
            field: "assigned_to".to_string(),
            min: 1,
            max: participant_count as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
