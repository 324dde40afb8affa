// ============================================================================
// Interfaces Module
// Contracts for the host locale and translation collaborators
// ============================================================================

mod locale;
mod translator;

pub use locale::NumberLocale;
pub use translator::{Catalog, NoTranslation, Translator};
