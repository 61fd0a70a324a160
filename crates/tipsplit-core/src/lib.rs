//! # tipsplit-core: Pure Bill-Splitting Logic for Tipsplit
//!
//! This crate is the **heart** of Tipsplit. It contains the tip calculator,
//! the itemized split engine and the roster/item store as plain Rust with
//! zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tipsplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation layer (tipsplit-cli, UIs)             │   │
//! │  │     bill input ──► tip selector ──► people ──► results view     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tipsplit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐   │   │
//! │  │  │ calculator │ │  itemized  │ │   roster   │ │   money    │   │   │
//! │  │  │ simple     │ │ per-person │ │ people +   │ │ rounding + │   │   │
//! │  │  │ split      │ │ allocation │ │ items      │ │ formatting │   │   │
//! │  │  └────────────┘ └────────────┘ └────────────┘ └────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Simple mode: even split of one bill amount
//! - [`itemized`] - Itemized mode: per-item assignment, proportional tip
//! - [`roster`] - Participant roster and bill items with consistent re-indexing
//! - [`money`] - Cent rounding, currency formatting, amount parsing
//! - [`types`] - Data types shared by the modules above
//! - [`validation`] - Input clamping and mutation rules
//! - [`config`] - Tunables (participant ceiling, default tip, presets)
//! - [`error`] - Error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: calculator and engine are deterministic
//! 2. **Clamp, Don't Fail**: calculator inputs are clamped into range
//! 3. **Reject Explicitly**: store mutations return `CoreResult` and leave
//!    state untouched on `Err`
//! 4. **Reference Rounding**: floating point amounts, rounded to cents only
//!    where the reference behaviour rounds
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::calculator::compute_simple_split;
//! use tipsplit_core::roster::Roster;
//!
//! let split = compute_simple_split(100.0, 15.0, 3);
//! assert_eq!(split.per_person, 38.33);
//!
//! let mut roster = Roster::new();
//! roster.increment_participants().unwrap();
//! roster.add_item("Pizza", 30.0, [1]).unwrap();
//! roster.add_item("Wine", 20.0, [1, 2]).unwrap();
//!
//! let result = roster.split(10.0);
//! assert_eq!(result.results[0].base_amount, 40.0);
//! assert_eq!(result.total_bill, 55.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod config;
pub mod error;
pub mod itemized;
pub mod money;
pub mod roster;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::compute_simple_split;
pub use config::SplitConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use itemized::compute_itemized_split;
pub use money::{format_currency, round_to_cents};
pub use roster::Roster;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of participants a roster can grow to by default.
pub const MAX_PARTICIPANTS: u32 = 20;

/// Tip percentage selected when a session starts.
pub const DEFAULT_TIP_PERCENT: f64 = 15.0;

/// Quick-pick tip percentages offered next to the tip slider.
pub const TIP_PRESETS: [f64; 8] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0];

/// Upper bound for any tip percentage.
pub const MAX_TIP_PERCENT: f64 = 100.0;
