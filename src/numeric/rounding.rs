// ============================================================================
// Half-Up Rounding
// Exact decimal rounding of f64 values and thousands grouping
// ============================================================================

use super::MAX_DECIMALS;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// A value rounded to a fixed number of fractional digits.
///
/// Holds the unsigned digit strings and the sign separately so the
/// caller can choose separators when rendering.
///
/// # Example
/// ```ignore
/// use num_humanize::numeric::RoundedNumber;
///
/// let n = RoundedNumber::round_half_up(-16504.0159, 2);
/// assert_eq!(n.to_grouped_string(',', ' '), "-16 504,02");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RoundedNumber {
    negative: bool,
    integer: String,
    fraction: String,
}

impl RoundedNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Round `value` to `decimals` places, ties away from zero.
    ///
    /// Values inside `Decimal`'s range go through `rust_decimal`; anything
    /// larger (or non-finite) falls back to the standard float formatter.
    /// A `Decimal` carries at most `MAX_DECIMALS` digits, so wider requests
    /// round at that scale and pad the fraction with zeros.
    pub fn round_half_up(value: f64, decimals: u32) -> Self {
        let scale = decimals.min(MAX_DECIMALS);

        match Decimal::from_f64(value) {
            Some(d) => Self::from_decimal(
                d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
                decimals,
            ),
            None => Self::from_float(value, decimals),
        }
    }

    fn from_decimal(d: Decimal, decimals: u32) -> Self {
        let scale = d.scale() as usize;
        let digits = d.mantissa().unsigned_abs().to_string();
        let digits = format!("{:0>width$}", digits, width = scale + 1);
        let (int_str, frac_str) = digits.split_at(digits.len() - scale);

        let fraction = format!("{:0<width$}", frac_str, width = decimals as usize);

        Self {
            negative: d.is_sign_negative() && !d.is_zero(),
            integer: int_str.to_string(),
            fraction,
        }
    }

    fn from_float(value: f64, decimals: u32) -> Self {
        if !value.is_finite() {
            return Self {
                negative: value.is_sign_negative() && !value.is_nan(),
                integer: format!("{}", value.abs()),
                fraction: String::new(),
            };
        }

        let text = format!("{:.*}", decimals as usize, value.abs());
        let (int_str, frac_str) = match text.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (text.as_str(), ""),
        };

        let mut rounded = Self {
            negative: value < 0.0,
            integer: int_str.to_string(),
            fraction: frac_str.to_string(),
        };
        rounded.negative &= !rounded.is_zero();
        rounded
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Integer digits, without sign or grouping.
    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fractional digits, always exactly the requested width.
    #[inline]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// True if the rounded value carries a minus sign.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True if every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.integer.bytes().all(|b| b == b'0') && self.fraction.bytes().all(|b| b == b'0')
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render with the given separators.
    pub fn to_grouped_string(&self, decimal_point: char, thousands_separator: char) -> String {
        let mut out = String::with_capacity(self.integer.len() * 2 + self.fraction.len() + 2);

        if self.negative {
            out.push('-');
        }
        out.push_str(&group_thousands(&self.integer, thousands_separator));

        if !self.fraction.is_empty() {
            out.push(decimal_point);
            out.push_str(&self.fraction);
        }

        out
    }
}

/// Insert `separator` between every group of three digits, counted from the right.
pub fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + (len / 3) * separator.len_utf8());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for RoundedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundedNumber({})", self)
    }
}

impl fmt::Display for RoundedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        if self.fraction.is_empty() {
            write!(f, "{}", self.integer)
        } else {
            write!(f, "{}.{}", self.integer, self.fraction)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(RoundedNumber::round_half_up(2.5, 0).to_string(), "3");
        assert_eq!(RoundedNumber::round_half_up(-2.5, 0).to_string(), "-3");
        assert_eq!(RoundedNumber::round_half_up(0.125, 2).to_string(), "0.13");
    }

    #[test]
    fn test_round_pads_fraction() {
        let n = RoundedNumber::round_half_up(254.0, 2);
        assert_eq!(n.integer_digits(), "254");
        assert_eq!(n.fraction_digits(), "00");

        let n = RoundedNumber::round_half_up(1.5, 4);
        assert_eq!(n.to_string(), "1.5000");
    }

    #[test]
    fn test_round_drops_noise() {
        let n = RoundedNumber::round_half_up(16504.0000234, 2);
        assert_eq!(n.to_string(), "16504.00");

        let n = RoundedNumber::round_half_up(16.565404, 1);
        assert_eq!(n.to_string(), "16.6");
    }

    #[test]
    fn test_negative_zero_loses_sign() {
        let n = RoundedNumber::round_half_up(-0.0000234, 2);
        assert!(!n.is_negative());
        assert!(n.is_zero());
        assert_eq!(n.to_string(), "0.00");
    }

    #[test]
    fn test_zero_decimals() {
        let n = RoundedNumber::round_half_up(23.54, 0);
        assert_eq!(n.to_string(), "24");
        assert_eq!(n.fraction_digits(), "");
    }

    #[test]
    fn test_precision_wider_than_decimal_scale() {
        let n = RoundedNumber::round_half_up(1.5, 30);
        assert_eq!(n.integer_digits(), "1");
        assert_eq!(n.fraction_digits(), format!("5{}", "0".repeat(29)));

        let n = RoundedNumber::round_half_up(-2.25, MAX_DECIMALS + 12);
        assert!(n.is_negative());
        assert_eq!(n.fraction_digits().len(), (MAX_DECIMALS + 12) as usize);
        assert!(n.fraction_digits().starts_with("25"));
    }

    #[test]
    fn test_out_of_decimal_range_falls_back() {
        let n = RoundedNumber::round_half_up(-1e29, 2);
        assert!(n.is_negative());
        assert!(n.integer_digits().len() >= 29);
        assert_eq!(n.fraction_digits(), "00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(RoundedNumber::round_half_up(f64::INFINITY, 2).to_string(), "inf");
        assert_eq!(
            RoundedNumber::round_half_up(f64::NEG_INFINITY, 2).to_string(),
            "-inf"
        );
        assert_eq!(RoundedNumber::round_half_up(f64::NAN, 2).to_string(), "NaN");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("999", ','), "999");
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("254854564", ' '), "254 854 564");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_grouped_rendering() {
        let n = RoundedNumber::round_half_up(-16504.0159, 2);
        assert_eq!(n.to_grouped_string(',', ' '), "-16 504,02");
        assert_eq!(n.to_grouped_string('.', ','), "-16,504.02");
    }
}
