// ============================================================================
// Numeric Module
// Exact rounding and digit grouping for float rendering
// ============================================================================
//
// This module provides:
// - RoundedNumber: an f64 rounded half-up to a fixed number of decimals
// - group_thousands: digit grouping with an arbitrary separator
// - FormatError: Error types for specs and configuration
//
// Design principles:
// - Rounding happens on decimal digits, not on binary floats
// - Rendering never fails; only construction of specs/configs does
// - Separators are supplied by the caller, never hardcoded

mod errors;
mod rounding;

pub use errors::{FormatError, FormatResult};
pub use rounding::{group_thousands, RoundedNumber};

/// Largest number of fractional digits the formatter will render.
///
/// Matches the maximum scale of `rust_decimal::Decimal`.
pub const MAX_DECIMALS: u32 = 28;
