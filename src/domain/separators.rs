// ============================================================================
// Locale Separators
// Decimal point and thousands separator pair
// ============================================================================

use crate::numeric::{FormatError, FormatResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two characters a locale contributes to number rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleSeparators {
    pub decimal_point: char,
    pub thousands_separator: char,
}

impl LocaleSeparators {
    /// "1,234.5"
    pub const EN_US: Self = Self::new('.', ',');

    /// "1 234,5"
    pub const RU_RU: Self = Self::new(',', ' ');

    /// "1.234,5"
    pub const DE_DE: Self = Self::new(',', '.');

    /// "1 234,5" with a narrow no-break space
    pub const FR_FR: Self = Self::new(',', '\u{202f}');

    pub const fn new(decimal_point: char, thousands_separator: char) -> Self {
        Self {
            decimal_point,
            thousands_separator,
        }
    }

    /// Check the pair can be told apart when reading the output.
    pub fn validate(&self) -> FormatResult<()> {
        if self.decimal_point == self.thousands_separator {
            return Err(FormatError::InvalidSeparators);
        }
        if self.decimal_point.is_ascii_digit() || self.thousands_separator.is_ascii_digit() {
            return Err(FormatError::InvalidSeparators);
        }
        if self.decimal_point.is_whitespace() {
            return Err(FormatError::InvalidSeparators);
        }
        Ok(())
    }
}

impl Default for LocaleSeparators {
    fn default() -> Self {
        Self::EN_US
    }
}
