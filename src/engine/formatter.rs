// ============================================================================
// Human Formatter
// Precision policies and unit-suffix wrappers over a host locale
// ============================================================================

use super::policies;
use super::scaling::scale_to_unit_bounded;
use crate::domain::{
    DecimalSpec, LocaleSeparators, NumericInput, SuffixJoin, UnitStyle, UnitTable, ABBR_WORDS,
    UNIT_TABLE_LEN,
};
use crate::interfaces::{NumberLocale, Translator};
use crate::numeric::FormatResult;
use std::fmt;
use std::sync::Arc;

static K_TABLE: UnitTable = UnitTable::k();
static SHORT_TABLE: UnitTable = UnitTable::short();

/// Number formatter bound to one locale and one set of unit tables.
///
/// Stateless after construction and safe to share between threads.
pub struct HumanFormatter {
    /// Separators and grouped-digit rendering
    locale: Arc<dyn NumberLocale>,

    /// Default spec for `format_default`
    policy_spec: DecimalSpec,

    /// Default spec for the `human_*_default` wrappers
    unit_spec: DecimalSpec,

    /// Word table for `human_abbr`, resolved once at construction
    abbr_units: UnitTable,
}

impl HumanFormatter {
    /// Create a formatter with default precision.
    ///
    /// # Errors
    /// - `InvalidSeparators` if the locale's separators are ambiguous
    /// - `InvalidUnitNames` if the translator yields a blank word
    pub fn new(locale: Arc<dyn NumberLocale>, translator: &dyn Translator) -> FormatResult<Self> {
        if let Err(e) = locale.separators().validate() {
            tracing::debug!("Rejected formatter locale: {}", e);
            return Err(e);
        }

        let abbr_units = translate_abbr_units(translator)?;
        Ok(Self::from_parts(
            locale,
            DecimalSpec::POLICY_DEFAULT,
            DecimalSpec::UNIT_DEFAULT,
            abbr_units,
        ))
    }

    pub(crate) fn from_parts(
        locale: Arc<dyn NumberLocale>,
        policy_spec: DecimalSpec,
        unit_spec: DecimalSpec,
        abbr_units: UnitTable,
    ) -> Self {
        Self {
            locale,
            policy_spec,
            unit_spec,
            abbr_units,
        }
    }

    // ========================================================================
    // Precision Policies
    // ========================================================================

    /// Exactly `decimals` fractional digits. Zero renders as "".
    pub fn fixed(&self, number: impl Into<NumericInput>, decimals: u32) -> String {
        policies::fixed(self.locale.as_ref(), as_f64(number), decimals)
    }

    /// `fixed` with trailing zeros trimmed. Zero renders as "".
    pub fn flex(&self, number: impl Into<NumericInput>, decimals: u32) -> String {
        policies::flex(self.locale.as_ref(), as_f64(number), decimals)
    }

    /// Adaptive precision for small values. Zero renders as "".
    pub fn smart(&self, number: impl Into<NumericInput>, show_decimals: u32) -> String {
        policies::smart(self.locale.as_ref(), as_f64(number), show_decimals)
    }

    /// Render with whichever policy `spec` names.
    pub fn format(&self, number: impl Into<NumericInput>, spec: DecimalSpec) -> String {
        policies::format(self.locale.as_ref(), as_f64(number), spec)
    }

    /// `format` with the configured policy spec
    pub fn format_default(&self, number: impl Into<NumericInput>) -> String {
        self.format(number, self.policy_spec)
    }

    // ========================================================================
    // Unit Wrappers
    // ========================================================================

    /// 23 000 -> "23k". Zero renders as "0".
    pub fn human_k(&self, number: impl Into<NumericInput>, spec: DecimalSpec) -> String {
        self.human(number, spec, UnitStyle::K)
    }

    /// 23 000 000 -> "23M". Zero renders as "0".
    pub fn human_short(&self, number: impl Into<NumericInput>, spec: DecimalSpec) -> String {
        self.human(number, spec, UnitStyle::Short)
    }

    /// 1 654 -> "1.7 thousand" (words from the translator). Zero renders as "0".
    pub fn human_abbr(&self, number: impl Into<NumericInput>, spec: DecimalSpec) -> String {
        self.human(number, spec, UnitStyle::Abbr)
    }

    /// `human_k` with the configured unit spec
    pub fn human_k_default(&self, number: impl Into<NumericInput>) -> String {
        self.human_k(number, self.unit_spec)
    }

    /// `human_short` with the configured unit spec
    pub fn human_short_default(&self, number: impl Into<NumericInput>) -> String {
        self.human_short(number, self.unit_spec)
    }

    /// `human_abbr` with the configured unit spec
    pub fn human_abbr_default(&self, number: impl Into<NumericInput>) -> String {
        self.human_abbr(number, self.unit_spec)
    }

    /// Scale with one of the shipped tables.
    pub fn human(
        &self,
        number: impl Into<NumericInput>,
        spec: DecimalSpec,
        style: UnitStyle,
    ) -> String {
        match style {
            UnitStyle::K => self.human_with(number, spec, &K_TABLE, style.join()),
            UnitStyle::Short => self.human_with(number, spec, &SHORT_TABLE, style.join()),
            UnitStyle::Abbr => self.human_with(number, spec, &self.abbr_units, style.join()),
        }
    }

    /// Scale with a caller-supplied table.
    ///
    /// Magnitudes past the table's last entry keep that suffix and a
    /// scaled value of 1000 or more.
    pub fn human_with(
        &self,
        number: impl Into<NumericInput>,
        spec: DecimalSpec,
        units: &UnitTable,
        join: SuffixJoin,
    ) -> String {
        let scaled = scale_to_unit_bounded(as_f64(number), units.max_depth());

        if scaled.is_zero() {
            return "0".to_string();
        }

        let rendered = self.format(scaled.value, spec);
        join.apply(rendered, units.suffix(scaled.depth))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn separators(&self) -> LocaleSeparators {
        self.locale.separators()
    }

    pub fn policy_spec(&self) -> DecimalSpec {
        self.policy_spec
    }

    pub fn unit_spec(&self) -> DecimalSpec {
        self.unit_spec
    }

    pub fn abbr_units(&self) -> &UnitTable {
        &self.abbr_units
    }
}

impl Default for HumanFormatter {
    /// en-US separators, untranslated English words
    fn default() -> Self {
        Self::from_parts(
            Arc::new(LocaleSeparators::default()),
            DecimalSpec::POLICY_DEFAULT,
            DecimalSpec::UNIT_DEFAULT,
            UnitTable::from_static(untranslated_abbr_names()),
        )
    }
}

impl fmt::Debug for HumanFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HumanFormatter")
            .field("separators", &self.separators())
            .field("policy_spec", &self.policy_spec)
            .field("unit_spec", &self.unit_spec)
            .field("abbr_units", &self.abbr_units)
            .finish()
    }
}

#[inline]
fn as_f64(number: impl Into<NumericInput>) -> f64 {
    let input: NumericInput = number.into();
    input.value()
}

fn untranslated_abbr_names() -> [&'static str; UNIT_TABLE_LEN] {
    let [w1, w2, w3, w4, w5] = ABBR_WORDS;
    ["", w1, w2, w3, w4, w5]
}

/// Resolve the word table through `translator`.
pub(crate) fn translate_abbr_units(translator: &dyn Translator) -> FormatResult<UnitTable> {
    UnitTable::new(ABBR_WORDS.map(|word| translator.translate(word).into_owned()))
}
