// ============================================================================
// Domain Models Module
// Value types shared by the formatter and its collaborators
// ============================================================================

pub mod config;
pub mod input;
pub mod separators;
pub mod spec;
pub mod units;

pub use config::FormatterConfig;
pub use input::NumericInput;
pub use separators::LocaleSeparators;
pub use spec::{DecimalSpec, Policy};
pub use units::{
    SuffixJoin, UnitStyle, UnitTable, ABBR_WORDS, K_UNITS, MAX_UNIT_DEPTH, SHORT_UNITS,
    UNIT_TABLE_LEN,
};
