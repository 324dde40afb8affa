// ============================================================================
// Formatter Factory
// Creates formatters from configuration
// ============================================================================

use crate::domain::{DecimalSpec, FormatterConfig, LocaleSeparators, UnitTable};
use crate::engine::formatter::{translate_abbr_units, HumanFormatter};
use crate::interfaces::{Catalog, NoTranslation, NumberLocale, Translator};
use crate::numeric::FormatResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a formatter from configuration
///
/// # Arguments
/// * `config` - Separators, default specs and optional word table
/// * `translator` - Resolves the word table when the config has none
///
/// # Example
/// ```
/// use num_humanize::prelude::*;
///
/// let config = FormatterConfig::ru_ru();
/// let formatter = create_from_config(config, &Catalog::russian_units()).unwrap();
/// assert_eq!(formatter.human_abbr_default(1654), "1,7 тыс.");
/// ```
pub fn create_from_config(
    config: FormatterConfig,
    translator: &dyn Translator,
) -> FormatResult<HumanFormatter> {
    let locale = Arc::new(config.separators);
    create_with_locale(config, locale, translator)
}

/// Like `create_from_config`, but renders through a host locale service.
///
/// The config's separators are ignored in favour of `locale.separators()`.
pub fn create_with_locale(
    config: FormatterConfig,
    locale: Arc<dyn NumberLocale>,
    translator: &dyn Translator,
) -> FormatResult<HumanFormatter> {
    // Validate against the separators actually used for rendering
    let config = FormatterConfig {
        separators: locale.separators(),
        ..config
    };
    if let Err(e) = config.validate() {
        tracing::debug!("Rejected formatter config: {}", e);
        return Err(e);
    }

    let abbr_units = match config.abbr_units {
        Some(units) => units,
        None => translate_abbr_units(translator)?,
    };

    tracing::debug!(
        "Created formatter: separators={:?} policy_spec={} unit_spec={}",
        config.separators,
        config.policy_spec,
        config.unit_spec
    );

    Ok(HumanFormatter::from_parts(
        locale,
        config.policy_spec,
        config.unit_spec,
        abbr_units,
    ))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for formatters
///
/// # Example
/// ```
/// use num_humanize::prelude::*;
///
/// let formatter = HumanFormatterBuilder::new()
///     .separators(',', '.')
///     .unit_spec(DecimalSpec::fixed(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(formatter.human_short_default(1_250_000), "1,25M");
/// ```
pub struct HumanFormatterBuilder {
    config: FormatterConfig,
    locale: Option<Arc<dyn NumberLocale>>,
    translator: Arc<dyn Translator>,
}

impl HumanFormatterBuilder {
    /// Create a builder with en-US separators and untranslated words
    pub fn new() -> Self {
        Self::from_config(FormatterConfig::default())
    }

    /// Start from an existing configuration
    pub fn from_config(config: FormatterConfig) -> Self {
        Self {
            config,
            locale: None,
            translator: Arc::new(NoTranslation),
        }
    }

    // ========================================================================
    // Locale Configuration
    // ========================================================================

    /// Set the decimal point and thousands separator
    pub fn separators(mut self, decimal_point: char, thousands_separator: char) -> Self {
        self.config.separators = LocaleSeparators::new(decimal_point, thousands_separator);
        self
    }

    /// Render through a host locale service instead of the configured separators
    pub fn locale(mut self, locale: Arc<dyn NumberLocale>) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Resolve unit words through a host translator
    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    // ========================================================================
    // Precision Configuration
    // ========================================================================

    /// Default spec for `format_default`
    pub fn policy_spec(mut self, spec: DecimalSpec) -> Self {
        self.config.policy_spec = spec;
        self
    }

    /// Default spec for the `human_*_default` wrappers
    pub fn unit_spec(mut self, spec: DecimalSpec) -> Self {
        self.config.unit_spec = spec;
        self
    }

    /// Literal word table for `human_abbr`, bypassing the translator
    pub fn abbr_units(mut self, units: UnitTable) -> Self {
        self.config.abbr_units = Some(units);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// en-US separators, English words
    pub fn en_us() -> Self {
        Self::from_config(FormatterConfig::en_us())
    }

    /// ru-RU separators, Russian abbreviations
    pub fn ru_ru() -> Self {
        Self::from_config(FormatterConfig::ru_ru()).translator(Arc::new(Catalog::russian_units()))
    }

    /// de-DE separators
    pub fn de_de() -> Self {
        Self::from_config(FormatterConfig::de_de())
    }

    /// fr-FR separators
    pub fn fr_fr() -> Self {
        Self::from_config(FormatterConfig::fr_fr())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the formatter
    pub fn build(self) -> FormatResult<HumanFormatter> {
        match self.locale {
            Some(locale) => create_with_locale(self.config, locale, self.translator.as_ref()),
            None => create_from_config(self.config, self.translator.as_ref()),
        }
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FormatterConfig {
        &self.config
    }
}

impl Default for HumanFormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FormatError;

    struct HostLocale;

    impl NumberLocale for HostLocale {
        fn separators(&self) -> LocaleSeparators {
            LocaleSeparators::new('.', '\'')
        }
    }

    #[test]
    fn test_create_ru_formatter() {
        let config = FormatterConfig::ru_ru();
        let formatter = create_from_config(config, &Catalog::russian_units()).unwrap();
        assert_eq!(formatter.human_abbr_default(-254854564), "-254,9 млн.");
        assert_eq!(formatter.separators(), LocaleSeparators::RU_RU);
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = FormatterConfig::new(LocaleSeparators::new(',', ','));
        let result = create_from_config(config, &NoTranslation);
        assert_eq!(result.err(), Some(FormatError::InvalidSeparators));
    }

    #[test]
    fn test_config_units_override_translator() {
        let config = FormatterConfig::en_us().with_abbr_units(UnitTable::short());
        let formatter = create_from_config(config, &Catalog::russian_units()).unwrap();
        assert_eq!(formatter.human_abbr_default(1654), "1.7 K");
    }

    #[test]
    fn test_create_with_host_locale() {
        let formatter =
            create_with_locale(FormatterConfig::ru_ru(), Arc::new(HostLocale), &NoTranslation)
                .unwrap();
        assert_eq!(formatter.flex(1234567.5, 2), "1'234'567.5");
        assert_eq!(formatter.separators(), LocaleSeparators::new('.', '\''));
    }

    #[test]
    fn test_builder_pattern() {
        let formatter = HumanFormatterBuilder::new()
            .separators(',', '.')
            .policy_spec(DecimalSpec::fixed(1))
            .unit_spec(DecimalSpec::fixed(2))
            .build()
            .unwrap();

        assert_eq!(formatter.human_short_default(1_250_000), "1,25M");
        assert_eq!(formatter.format_default(1234.56), "1.234,6");
    }

    #[test]
    fn test_builder_translator() {
        let catalog = Catalog::new()
            .with("thousand", "Tsd.")
            .with("million", "Mio.")
            .with("billion", "Mrd.")
            .with("trillion", "Bio.")
            .with("quadrillion", "Brd.");

        let formatter = HumanFormatterBuilder::de_de()
            .translator(Arc::new(catalog))
            .build()
            .unwrap();

        assert_eq!(formatter.human_abbr_default(3_400_000), "3,4 Mio.");
    }

    #[test]
    fn test_preset_builders() {
        let ru = HumanFormatterBuilder::ru_ru().build().unwrap();
        assert_eq!(ru.human_abbr_default(1654), "1,7 тыс.");

        let en = HumanFormatterBuilder::en_us().build().unwrap();
        assert_eq!(en.human_abbr_default(1654), "1.7 thousand");

        let fr = HumanFormatterBuilder::fr_fr().build().unwrap();
        assert_eq!(fr.flex(16504.01, 2), "16\u{202f}504,01");
    }

    #[test]
    fn test_get_config() {
        let builder = HumanFormatterBuilder::ru_ru().unit_spec(DecimalSpec::smart(2));
        assert_eq!(builder.get_config().unit_spec, DecimalSpec::smart(2));
        assert_eq!(builder.get_config().separators, LocaleSeparators::RU_RU);
    }
}
