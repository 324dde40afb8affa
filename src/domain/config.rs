// ============================================================================
// Formatter Configuration
// Locale, default precision and unit-name overrides for a formatter
// ============================================================================

use crate::domain::{DecimalSpec, LocaleSeparators, UnitTable};
use crate::numeric::FormatResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything a `HumanFormatter` needs besides its collaborators
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatterConfig {
    /// Decimal point and thousands separator
    pub separators: LocaleSeparators,

    /// Spec used by `format_default` and the bare policies' defaults
    pub policy_spec: DecimalSpec,

    /// Spec used by the `human_*_default` wrappers
    pub unit_spec: DecimalSpec,

    /// Optional: literal word table for `human_abbr`
    /// None means the words are resolved through the translator
    pub abbr_units: Option<UnitTable>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new(LocaleSeparators::default())
    }
}

impl FormatterConfig {
    /// Create a configuration with default precision
    pub fn new(separators: LocaleSeparators) -> Self {
        Self {
            separators,
            policy_spec: DecimalSpec::POLICY_DEFAULT,
            unit_spec: DecimalSpec::UNIT_DEFAULT,
            abbr_units: None,
        }
    }

    /// Builder method: Set the default spec for the bare policies
    pub fn with_policy_spec(mut self, spec: DecimalSpec) -> Self {
        self.policy_spec = spec;
        self
    }

    /// Builder method: Set the default spec for the unit wrappers
    pub fn with_unit_spec(mut self, spec: DecimalSpec) -> Self {
        self.unit_spec = spec;
        self
    }

    /// Builder method: Use a fixed word table instead of the translator
    pub fn with_abbr_units(mut self, units: UnitTable) -> Self {
        self.abbr_units = Some(units);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> FormatResult<()> {
        self.separators.validate()?;
        self.policy_spec.validate()?;
        self.unit_spec.validate()?;
        if let Some(units) = &self.abbr_units {
            units.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl FormatterConfig {
    /// "16,504.01", "1.7 thousand"
    pub fn en_us() -> Self {
        Self::new(LocaleSeparators::EN_US)
    }

    /// "16 504,01", "1,7 тыс." (with the Russian catalog)
    pub fn ru_ru() -> Self {
        Self::new(LocaleSeparators::RU_RU)
    }

    /// "16.504,01"
    pub fn de_de() -> Self {
        Self::new(LocaleSeparators::DE_DE)
    }

    /// "16 504,01" with a narrow no-break space
    pub fn fr_fr() -> Self {
        Self::new(LocaleSeparators::FR_FR)
    }
}

// ============================================================================
// Serialized Form
// ============================================================================

#[cfg(feature = "serde")]
impl FormatterConfig {
    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> FormatResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            tracing::debug!("Rejected formatter config: {}", e);
            crate::numeric::FormatError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> FormatResult<String> {
        serde_json::to_string(self).map_err(|e| {
            tracing::debug!("Could not serialize formatter config: {}", e);
            crate::numeric::FormatError::InvalidConfig
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Policy;
    use crate::numeric::FormatError;

    #[test]
    fn test_config_creation() {
        let config = FormatterConfig::ru_ru();

        assert_eq!(config.separators, LocaleSeparators::RU_RU);
        assert_eq!(config.policy_spec, DecimalSpec::new(2, Policy::Flex));
        assert_eq!(config.unit_spec, DecimalSpec::new(1, Policy::Flex));
        assert!(config.abbr_units.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FormatterConfig::en_us()
            .with_policy_spec(DecimalSpec::smart(3))
            .with_unit_spec(DecimalSpec::fixed(2))
            .with_abbr_units(UnitTable::short());

        assert_eq!(config.policy_spec, DecimalSpec::smart(3));
        assert_eq!(config.unit_spec, DecimalSpec::fixed(2));
        assert_eq!(config.abbr_units, Some(UnitTable::short()));
    }

    #[test]
    fn test_validation() {
        let config = FormatterConfig::new(LocaleSeparators::new('.', '.'));
        assert_eq!(config.validate(), Err(FormatError::InvalidSeparators));

        let config = FormatterConfig::en_us().with_unit_spec(DecimalSpec::flex(40));
        assert_eq!(config.validate(), Err(FormatError::PrecisionTooLarge));
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(FormatterConfig::default(), FormatterConfig::en_us());
        assert_eq!(FormatterConfig::de_de().separators.thousands_separator, '.');
        assert_eq!(FormatterConfig::fr_fr().separators.decimal_point, ',');
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip() {
        let config = FormatterConfig::ru_ru().with_unit_spec(DecimalSpec::smart(2));
        let json = config.to_json().unwrap();
        assert_eq!(FormatterConfig::from_json(&json).unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_partial_and_invalid() {
        let config = FormatterConfig::from_json(r#"{"policy_spec":{"decimals":3,"policy":"fixed"}}"#)
            .unwrap();
        assert_eq!(config.policy_spec, DecimalSpec::fixed(3));
        assert_eq!(config.separators, LocaleSeparators::EN_US);

        assert_eq!(
            FormatterConfig::from_json("not json"),
            Err(FormatError::InvalidConfig)
        );
        assert_eq!(
            FormatterConfig::from_json(
                r#"{"separators":{"decimal_point":",","thousands_separator":","}}"#
            ),
            Err(FormatError::InvalidSeparators)
        );
    }

    #[test]
    fn test_validation_checks_abbr_units() {
        let config = FormatterConfig::en_us()
            .with_abbr_units(UnitTable::from_static(["oops", "K", "M", "B", "T", "Q"]));
        assert_eq!(config.validate(), Err(FormatError::InvalidUnitNames));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_bad_abbr_units() {
        assert_eq!(
            FormatterConfig::from_json(r#"{"abbr_units":{"names":["oops","","x","x","x","x"]}}"#),
            Err(FormatError::InvalidConfig)
        );

        let config = FormatterConfig::from_json(
            r#"{"abbr_units":{"names":["","Tsd.","Mio.","Mrd.","Bio.","Brd."]}}"#,
        )
        .unwrap();
        assert_eq!(config.abbr_units.unwrap().suffix(2), "Mio.");
    }
}
