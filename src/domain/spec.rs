// ============================================================================
// Decimal Spec
// Precision and rounding policy for a single formatting call
// ============================================================================

use crate::numeric::{FormatError, FormatResult, MAX_DECIMALS};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Policy
// ============================================================================

/// How the fractional part is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// Exactly `decimals` digits, never trimmed
    /// 254 @ 2 -> "254.00"
    Fixed,

    /// `decimals` digits, then trailing zeros and a bare separator removed
    /// 16504.0000234 @ 2 -> "16504"
    #[default]
    Flex,

    /// Widens the budget past leading runs of 0s or 9s in small values
    /// 0.0000000123 @ 2 -> "0.000000012"
    Smart,
}

impl Policy {
    /// Resolve a policy by name. Unknown names fall back to `Flex`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "fixed" => Policy::Fixed,
            "smart" => Policy::Smart,
            "flex" | "" => Policy::Flex,
            other => {
                tracing::debug!("Unknown rounding policy {:?}, using flex", other);
                Policy::Flex
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Policy::Fixed => "fixed",
            Policy::Flex => "flex",
            Policy::Smart => "smart",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Decimal Spec
// ============================================================================

/// Number of decimals plus the policy applying them.
///
/// # Example
/// ```ignore
/// use num_humanize::domain::{DecimalSpec, Policy};
///
/// let spec = DecimalSpec::new(3, Policy::Smart);
/// let legacy: DecimalSpec = "3 smart".parse()?;
/// assert_eq!(spec, legacy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalSpec {
    pub decimals: u32,
    pub policy: Policy,
}

impl DecimalSpec {
    /// Default for `fixed`/`flex`/`smart`: two decimals, flex
    pub const POLICY_DEFAULT: Self = Self::new(2, Policy::Flex);

    /// Default for the unit wrappers: one decimal, flex
    pub const UNIT_DEFAULT: Self = Self::new(1, Policy::Flex);

    #[inline]
    pub const fn new(decimals: u32, policy: Policy) -> Self {
        Self { decimals, policy }
    }

    /// Checked constructor for signed or untrusted precision values.
    ///
    /// # Errors
    /// - `NegativeDecimals` if `decimals < 0`
    /// - `PrecisionTooLarge` if `decimals > MAX_DECIMALS`
    pub fn try_new(decimals: i64, policy: Policy) -> FormatResult<Self> {
        if decimals < 0 {
            return Err(FormatError::NegativeDecimals);
        }
        if decimals > MAX_DECIMALS as i64 {
            return Err(FormatError::PrecisionTooLarge);
        }
        Ok(Self::new(decimals as u32, policy))
    }

    #[inline]
    pub const fn fixed(decimals: u32) -> Self {
        Self::new(decimals, Policy::Fixed)
    }

    #[inline]
    pub const fn flex(decimals: u32) -> Self {
        Self::new(decimals, Policy::Flex)
    }

    #[inline]
    pub const fn smart(decimals: u32) -> Self {
        Self::new(decimals, Policy::Smart)
    }

    pub const fn policy_default() -> Self {
        Self::POLICY_DEFAULT
    }

    pub const fn unit_default() -> Self {
        Self::UNIT_DEFAULT
    }

    /// Check the precision is renderable.
    pub fn validate(&self) -> FormatResult<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(FormatError::PrecisionTooLarge);
        }
        Ok(())
    }
}

impl Default for DecimalSpec {
    fn default() -> Self {
        Self::POLICY_DEFAULT
    }
}

impl From<u32> for DecimalSpec {
    fn from(decimals: u32) -> Self {
        Self::flex(decimals)
    }
}

impl fmt::Display for DecimalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.decimals, self.policy)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DecimalSpec {
    type Err = FormatError;

    /// Parse the legacy `"<decimals> <policy>"` form.
    ///
    /// # Examples
    /// - "1" -> 1 flex
    /// - "3 smart" -> 3 smart
    /// - "2 bogus" -> 2 flex
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        let decimals = parts.next().ok_or(FormatError::EmptySpec)?;
        let decimals: i64 = decimals
            .parse()
            .map_err(|_| FormatError::InvalidDecimals)?;

        let policy = parts.next().map(Policy::from_name).unwrap_or_default();

        Self::try_new(decimals, policy)
    }
}
