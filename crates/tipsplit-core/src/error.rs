//! # Error Types
//!
//! Domain-specific error types for tipsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                      │
//! │  ├── CoreError        - Rejected roster / item mutations               │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  tipsplit-cli errors (in app)                                          │
//! │  └── ApiError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rejection Semantics
//! Every `Err` returned by the store means "nothing changed". Callers never
//! have to roll anything back.
//!
//! The calculator and the itemized engine never return errors: out-of-range
//! numbers are clamped instead.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Roster and item store errors.
///
/// Each variant is a mutation the store declined to apply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The participant index is outside `[1, participant_count]`.
    #[error("Participant {index} not found (roster has {count})")]
    ParticipantNotFound { index: u32, count: u32 },

    /// The roster is already at its configured ceiling.
    #[error("Cannot have more than {max} participants")]
    ParticipantLimit { max: u32 },

    /// The roster must keep at least one participant.
    #[error("Cannot remove the last participant")]
    LastParticipant,

    /// Shrinking the roster would strand an item assigned to this participant.
    ///
    /// ## User Workflow
    /// ```text
    /// People: 3, "Dessert" assigned to [3]
    ///      │
    ///      ▼
    /// decrement_participants()
    ///      │
    ///      ▼
    /// ParticipantAssigned { index: 3 }
    ///      │
    ///      ▼
    /// UI keeps the minus button disabled
    /// ```
    #[error("Participant {index} still has items assigned")]
    ParticipantAssigned { index: u32 },

    /// No item carries this id.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a mutation request carries a field that doesn't meet
/// requirements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed amount text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
