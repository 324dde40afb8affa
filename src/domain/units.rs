// ============================================================================
// Unit Tables
// Magnitude suffixes indexed by the number of ×1000 reductions
// ============================================================================

use crate::numeric::{FormatError, FormatResult};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of entries in every unit table (depth 0..=5).
pub const UNIT_TABLE_LEN: usize = 6;

/// Deepest magnitude a unit table can name.
pub const MAX_UNIT_DEPTH: u32 = (UNIT_TABLE_LEN - 1) as u32;

/// `k`-style suffixes: 23 000 -> 23k
pub const K_UNITS: [&str; UNIT_TABLE_LEN] = ["", "k", "kk", "kkk", "kkkk", "kkkkk"];

/// Short-letter suffixes: 23 000 000 -> 23M
pub const SHORT_UNITS: [&str; UNIT_TABLE_LEN] = ["", "K", "M", "B", "T", "Q"];

/// Message ids for the word-style suffixes, resolved through a `Translator`
pub const ABBR_WORDS: [&str; UNIT_TABLE_LEN - 1] =
    ["thousand", "million", "billion", "trillion", "quadrillion"];

// ============================================================================
// Suffix Join
// ============================================================================

/// How the suffix is attached to the rendered number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SuffixJoin {
    /// "16,6kk"
    #[default]
    Direct,
    /// "1,7 тыс."
    Spaced,
}

impl SuffixJoin {
    /// Append `suffix` to `number`. Empty suffixes append nothing.
    pub fn apply(self, mut number: String, suffix: &str) -> String {
        if suffix.is_empty() {
            return number;
        }
        if self == SuffixJoin::Spaced {
            number.push(' ');
        }
        number.push_str(suffix);
        number
    }
}

// ============================================================================
// Unit Style
// ============================================================================

/// The three shipped wrapper styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitStyle {
    /// `human_k`
    K,
    /// `human_short`
    Short,
    /// `human_abbr`
    Abbr,
}

impl UnitStyle {
    pub fn join(self) -> SuffixJoin {
        match self {
            UnitStyle::K | UnitStyle::Short => SuffixJoin::Direct,
            UnitStyle::Abbr => SuffixJoin::Spaced,
        }
    }
}

// ============================================================================
// Unit Table
// ============================================================================

/// Ordered suffixes for depth 0..=5. Depth 0 is always the empty string.
///
/// # Example
/// ```ignore
/// use num_humanize::domain::UnitTable;
///
/// let bytes = UnitTable::new(["KB", "MB", "GB", "TB", "PB"])?;
/// assert_eq!(bytes.suffix(2), "MB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UnitNames"))]
pub struct UnitTable {
    names: [Cow<'static, str>; UNIT_TABLE_LEN],
}

/// Unchecked serialized form of a `UnitTable`
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UnitNames {
    names: [String; UNIT_TABLE_LEN],
}

#[cfg(feature = "serde")]
impl TryFrom<UnitNames> for UnitTable {
    type Error = FormatError;

    fn try_from(raw: UnitNames) -> FormatResult<Self> {
        let table = Self {
            names: raw.names.map(Cow::Owned),
        };
        table.validate()?;
        Ok(table)
    }
}

impl UnitTable {
    /// Build a table from the five non-empty suffixes for depth 1..=5.
    ///
    /// # Errors
    /// Returns `InvalidUnitNames` if any suffix is blank.
    pub fn new<S: Into<Cow<'static, str>>>(
        names: [S; UNIT_TABLE_LEN - 1],
    ) -> FormatResult<Self> {
        let names: [Cow<'static, str>; UNIT_TABLE_LEN - 1] = names.map(Into::into);
        let [n1, n2, n3, n4, n5] = names;
        let table = Self {
            names: [Cow::Borrowed(""), n1, n2, n3, n4, n5],
        };
        table.validate()?;
        Ok(table)
    }

    /// Depth 0 must be empty and every deeper suffix non-blank.
    ///
    /// # Errors
    /// Returns `InvalidUnitNames` otherwise.
    pub fn validate(&self) -> FormatResult<()> {
        if !self.names[0].is_empty() || self.names[1..].iter().any(|n| n.trim().is_empty()) {
            return Err(FormatError::InvalidUnitNames);
        }
        Ok(())
    }

    /// Table over static data, no validation.
    pub const fn from_static(names: [&'static str; UNIT_TABLE_LEN]) -> Self {
        Self {
            names: [
                Cow::Borrowed(names[0]),
                Cow::Borrowed(names[1]),
                Cow::Borrowed(names[2]),
                Cow::Borrowed(names[3]),
                Cow::Borrowed(names[4]),
                Cow::Borrowed(names[5]),
            ],
        }
    }

    pub const fn k() -> Self {
        Self::from_static(K_UNITS)
    }

    pub const fn short() -> Self {
        Self::from_static(SHORT_UNITS)
    }

    /// Deepest depth with a suffix
    #[inline]
    pub const fn max_depth(&self) -> u32 {
        MAX_UNIT_DEPTH
    }

    /// Suffix for `depth`, clamped to the last entry.
    pub fn suffix(&self, depth: u32) -> &str {
        let index = (depth as usize).min(UNIT_TABLE_LEN - 1);
        &self.names[index]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_ref())
    }
}
