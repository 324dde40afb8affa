// ============================================================================
// Format Errors
// Error types for precision specs and formatter configuration
// ============================================================================

use std::fmt;

/// Errors raised while building a precision spec or a formatter.
///
/// Formatting itself is total; these only surface from constructors,
/// the legacy string adapter and config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Precision spec string was empty
    EmptySpec,
    /// Decimals token is not an integer
    InvalidDecimals,
    /// Decimals token is a negative integer
    NegativeDecimals,
    /// Decimals exceed `MAX_DECIMALS`
    PrecisionTooLarge,
    /// Decimal point and thousands separator are unusable together
    InvalidSeparators,
    /// Unit words are missing or malformed
    InvalidUnitNames,
    /// Serialized configuration could not be read or written
    InvalidConfig,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::EmptySpec => write!(f, "empty precision spec"),
            FormatError::InvalidDecimals => {
                write!(f, "invalid decimals: expected a non-negative integer")
            },
            FormatError::NegativeDecimals => write!(f, "decimals cannot be negative"),
            FormatError::PrecisionTooLarge => write!(
                f,
                "precision too large: at most {} decimals are supported",
                super::MAX_DECIMALS
            ),
            FormatError::InvalidSeparators => write!(
                f,
                "invalid separators: decimal point must be a non-digit distinct from the thousands separator"
            ),
            FormatError::InvalidUnitNames => write!(f, "unit names must be non-empty"),
            FormatError::InvalidConfig => write!(f, "invalid formatter configuration"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for formatter construction
pub type FormatResult<T> = Result<T, FormatError>;
