//! # Money Module
//!
//! Cent rounding, currency formatting and amount parsing.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  REFERENCE ROUNDING ORDER                                               │
//! │                                                                         │
//! │  Amounts are binary floats and are rounded to cents only at fixed      │
//! │  points:                                                                │
//! │    simple split   → tip, total, per-person each rounded on its own     │
//! │    itemized split → nothing rounded until display                      │
//! │                                                                         │
//! │  Switching to integer cents would move those rounding points and       │
//! │  change visible results (e.g. $10.50 @ 15% → tip $1.58, total $12.08). │
//! │                                                                         │
//! │  Display formatting rounds the stored binary value instead, so an      │
//! │  unrounded 1.575 shows as $1.57.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::money::{format_currency, parse_amount, round_to_cents};
//!
//! assert_eq!(round_to_cents(1.575), 1.58);
//! assert_eq!(format_currency(10.0), "$10.00");
//! assert_eq!(parse_amount("$12.5"), Some(12.5));
//! ```

// =============================================================================
// Rounding
// =============================================================================

/// Rounds an amount to whole cents, half away from zero.
///
/// Computed as `round(x * 100) / 100`, the exact expression the reference
/// rounding uses, so half-cent ties land on the same side.
///
/// ## Example
/// ```rust
/// use tipsplit_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(38.333333), 38.33);
/// assert_eq!(round_to_cents(12.075), 12.08);
/// ```
#[inline]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// =============================================================================
// Formatting & Parsing
// =============================================================================

/// Formats an amount as a USD string with exactly two decimals.
///
/// ## Example
/// ```rust
/// use tipsplit_core::money::format_currency;
///
/// assert_eq!(format_currency(10.0), "$10.00");
/// assert_eq!(format_currency(10.5), "$10.50");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format_amount(amount, "$")
}

/// Formats an amount with an arbitrary currency symbol, e.g. `"€12.07"`.
///
/// ## Rounding
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  The exact binary value is rounded, not the decimal literal:           │
/// │                                                                         │
/// │    1.575  is stored as 1.57499999...  → "1.57"                         │
/// │    12.075 is stored as 12.0749999...  → "12.07"                        │
/// │                                                                         │
/// │  Exact half-cent ties (0.125, 0.375, ...) round away from zero.        │
/// │  Non-finite amounts display as 0.00; negatives as "$-5.50".            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// This differs from [`round_to_cents`], which rounds `x * 100` and so
/// pushes 1.575 up to 1.58.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() || amount == 0.0 {
        return format!("{}0.00", symbol);
    }

    // `{:.2}` breaks exact ties to even; ties only occur at odd multiples of 1/8
    let eighths = amount * 8.0;
    let amount = if eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0 {
        round_to_cents(amount)
    } else {
        amount
    };

    format!("{}{:.2}", symbol, amount)
}

/// Parses user-typed amount text the way the bill input field does.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "$1,234.5"  ──► strip everything but digits and '.' ──► "1234.5"       │
/// │                                                                         │
/// │  more than one '.'        → None   (keystroke rejected)                 │
/// │  more than two decimals   → None   (keystroke rejected)                 │
/// │  "" or "."                → Some(0.0)                                    │
/// │  otherwise                → Some(value)                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use tipsplit_core::money::parse_amount;
///
/// assert_eq!(parse_amount("42.10"), Some(42.1));
/// assert_eq!(parse_amount("1.2.3"), None);
/// assert_eq!(parse_amount("9.999"), None);
/// assert_eq!(parse_amount(""), Some(0.0));
/// ```
pub fn parse_amount(text: &str) -> Option<f64> {
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = numeric.split('.');
    let _whole = parts.next();
    let fraction = parts.next();
    if parts.next().is_some() {
        return None;
    }
    if fraction.is_some_and(|f| f.len() > 2) {
        return None;
    }

    Some(numeric.parse::<f64>().unwrap_or(0.0))
}

// =============================================================================
// Unit Tests
// =============================================================================
