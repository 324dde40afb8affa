// ============================================================================
// Engine Module
// Unit scaling, decimal policies and the formatter built on them
// ============================================================================

mod formatter;
mod policies;
mod scaling;

pub mod factory;

pub use factory::{create_from_config, create_with_locale, HumanFormatterBuilder};
pub use formatter::HumanFormatter;
pub use policies::{fixed, flex, format, smart};
pub use scaling::{scale_to_unit, scale_to_unit_bounded, UnitScale};
