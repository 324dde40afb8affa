// ============================================================================
// Numeric Input
// Normalizes anything number-like (or absent) into an f64
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value accepted by every formatting operation.
///
/// Absent values (`None`) and `false` normalize to zero, which every
/// formatter short-circuits on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericInput(f64);

impl NumericInput {
    /// Zero / absent
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// True for `0`, `-0`, `None` and `false`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for NumericInput {
                #[inline]
                fn from(value: $t) -> Self {
                    Self(value as f64)
                }
            }
        )*
    };
}

impl_from_primitive!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<bool> for NumericInput {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Self(1.0)
        } else {
            Self::ZERO
        }
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::ZERO, Into::into)
    }
}

impl From<NumericInput> for f64 {
    #[inline]
    fn from(input: NumericInput) -> Self {
        input.0
    }
}
