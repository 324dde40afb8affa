// ============================================================================
// Locale Interface
// Defines the contract for locale-specific number rendering
// ============================================================================

use crate::domain::LocaleSeparators;
use crate::numeric::RoundedNumber;

/// Host locale service.
///
/// Supplies the separator pair and the grouped-digit primitive used by
/// the `fixed` policy. Hosts with their own number formatter can override
/// `format_grouped`; the other policies only rely on `separators()` to
/// find the decimal point again.
pub trait NumberLocale: Send + Sync {
    /// Separators for the current locale
    fn separators(&self) -> LocaleSeparators;

    /// Render `value` with exactly `decimals` fractional digits,
    /// rounded half away from zero and grouped by thousands.
    fn format_grouped(&self, value: f64, decimals: u32) -> String {
        let seps = self.separators();
        RoundedNumber::round_half_up(value, decimals)
            .to_grouped_string(seps.decimal_point, seps.thousands_separator)
    }
}

impl NumberLocale for LocaleSeparators {
    #[inline]
    fn separators(&self) -> LocaleSeparators {
        *self
    }
}
