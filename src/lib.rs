// ============================================================================
// Human Number Formatting Library
// Locale-aware rendering with magnitude suffixes and adaptive precision
// ============================================================================

//! # num-humanize
//!
//! Turns numbers into short, locale-formatted strings.
//!
//! ## Features
//!
//! - **Three precision policies**: `fixed` (exact width), `flex` (trailing
//!   zeros trimmed) and `smart` (keeps digits past leading runs of 0s/9s)
//! - **Magnitude suffixes**: `16,6kk`, `2,5Q`, `1,7 тыс.` or any custom table
//! - **Pluggable locale and translation** via the `NumberLocale` and
//!   `Translator` traits
//! - **Exact half-up rounding** on decimal digits via `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use num_humanize::prelude::*;
//!
//! let formatter = HumanFormatterBuilder::ru_ru().build().unwrap();
//!
//! assert_eq!(formatter.human_abbr(1654, DecimalSpec::unit_default()), "1,7 тыс.");
//! assert_eq!(formatter.human_k(16565404.0000234, DecimalSpec::unit_default()), "16,6kk");
//! assert_eq!(formatter.flex(16504.0100, 2), "16 504,01");
//! assert_eq!(formatter.smart(0.0000000013, 0), "0,0000000013");
//!
//! // Zero: bare policies render "", unit wrappers render "0"
//! assert_eq!(formatter.fixed(0, 2), "");
//! assert_eq!(formatter.human_short(0, DecimalSpec::unit_default()), "0");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DecimalSpec, FormatterConfig, LocaleSeparators, NumericInput, Policy, SuffixJoin,
        UnitStyle, UnitTable,
    };
    pub use crate::engine::{
        create_from_config, create_with_locale, scale_to_unit, HumanFormatter,
        HumanFormatterBuilder, UnitScale,
    };
    pub use crate::interfaces::{Catalog, NoTranslation, NumberLocale, Translator};
    pub use crate::numeric::{FormatError, FormatResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn ru() -> HumanFormatter {
        HumanFormatterBuilder::ru_ru().build().unwrap()
    }

    #[test]
    fn test_literal_scenarios() {
        let f = ru();
        let unit = DecimalSpec::unit_default();

        assert_eq!(f.human_abbr(1654, unit), "1,7 тыс.");
        assert_eq!(f.human_abbr(-254854564, unit), "-254,9 млн.");
        assert_eq!(f.human_k(16565404.0000234, unit), "16,6kk");
        assert_eq!(f.human_short(2548545641111999u64, unit), "2,5Q");
        assert_eq!(f.flex(16504.0000234, 2), "16 504");
        assert_eq!(f.flex(16504.0100, 2), "16 504,01");
        assert_eq!(f.smart(0.0000000013, 0), "0,0000000013");
        assert_eq!(f.smart(23.54, 0), "24");
        assert_eq!(f.fixed(254, 2), "254,00");
    }

    #[test]
    fn test_legacy_spec_strings() {
        let f = ru();
        let spec = |s: &str| s.parse::<DecimalSpec>().unwrap();

        assert_eq!(f.human_k(2.00000231, spec("2 smart")), "2,0000023");
        assert_eq!(f.human_k(2.00000231, spec("2 fixed")), "2,00");
        assert_eq!(f.human_k(2.00000231, spec("2 flex")), "2");
        assert_eq!(f.human_k(2.00000231, spec("2 round")), "2");
        assert_eq!(f.human_short(254854564, spec("1")), "254,9M");
    }

    #[test]
    fn test_small_negatives() {
        let f = ru();

        assert_eq!(f.human_k(-0.01, DecimalSpec::unit_default()), "0");
        assert_eq!(f.human_short(-0.01, DecimalSpec::fixed(1)), "0,0");
        assert_eq!(f.human_abbr(-0.01, DecimalSpec::flex(1)), "0");
        assert_eq!(f.human_k(-0.01, DecimalSpec::smart(1)), "-0,01");
        assert_eq!(f.human_abbr(-0.49, DecimalSpec::flex(1)), "-0,5");
        assert_eq!(f.flex(-0.01, 1), "0");
    }

    #[test]
    fn test_shared_across_threads() {
        let f = Arc::new(ru());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let f = Arc::clone(&f);
                std::thread::spawn(move || f.human_short(1000 * (i + 1), DecimalSpec::unit_default()))
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["1K", "2K", "3K", "4K"]);
    }

    proptest! {
        #[test]
        fn prop_human_sign_symmetric(x in 0.5f64..1e17, d in 0u32..4) {
            let f = ru();
            for style in [UnitStyle::K, UnitStyle::Short, UnitStyle::Abbr] {
                for spec in [DecimalSpec::flex(d), DecimalSpec::fixed(d), DecimalSpec::smart(d)] {
                    let pos = f.human(x, spec, style);
                    let neg = f.human(-x, spec, style);
                    prop_assert_eq!(neg, format!("-{}", pos));
                }
            }
        }

        #[test]
        fn prop_small_negatives_unsigned_when_zero(x in 1e-12f64..0.5, d in 0u32..4) {
            let f = ru();
            for style in [UnitStyle::K, UnitStyle::Short, UnitStyle::Abbr] {
                for spec in [DecimalSpec::flex(d), DecimalSpec::fixed(d), DecimalSpec::smart(d)] {
                    let pos = f.human(x, spec, style);
                    let neg = f.human(-x, spec, style);
                    if pos.chars().all(|c| c == '0' || c == ',') {
                        prop_assert_eq!(neg, pos);
                    } else {
                        prop_assert_eq!(neg, format!("-{}", pos));
                    }
                }
            }
        }

        #[test]
        fn prop_zero_asymmetry(d in 0u32..10) {
            let f = ru();
            prop_assert_eq!(f.fixed(0, d), "");
            prop_assert_eq!(f.flex(0, d), "");
            prop_assert_eq!(f.smart(0, d), "");
            prop_assert_eq!(f.human_k(0, DecimalSpec::flex(d)), "0");
            prop_assert_eq!(f.human_short(0, DecimalSpec::fixed(d)), "0");
            prop_assert_eq!(f.human_abbr(0, DecimalSpec::smart(d)), "0");
        }
    }
}
