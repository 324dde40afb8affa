// ============================================================================
// Unit Scaling
// Reduces a value by powers of 1000 until it fits a unit suffix
// ============================================================================

/// A value reduced by `1000^depth`, sign preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    /// Scaled value, `|value| < 1000` unless the depth was clamped
    pub value: f64,
    /// Number of ×1000 reductions applied
    pub depth: u32,
}

impl UnitScale {
    pub const ZERO: Self = Self {
        value: 0.0,
        depth: 0,
    };

    /// True when the input was zero or absent
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Undo the reduction: `value × 1000^depth`
    pub fn unscaled(&self) -> f64 {
        self.value * 1000f64.powi(self.depth as i32)
    }
}

/// Divide by 1000 while `|number| >= 1000`.
///
/// Non-finite inputs are returned unscaled at depth 0.
///
/// # Example
/// ```ignore
/// let s = scale_to_unit(-254_854_564.0);
/// assert_eq!(s.depth, 2);   // value ≈ -254.854564
/// ```
#[inline]
pub fn scale_to_unit(number: f64) -> UnitScale {
    scale_to_unit_bounded(number, u32::MAX)
}

/// Same as `scale_to_unit`, but stops dividing at `max_depth`.
///
/// A clamped result keeps `|value| >= 1000` so the magnitude stays readable
/// with the deepest available suffix (1e21 -> "1 000 000Q").
pub fn scale_to_unit_bounded(number: f64, max_depth: u32) -> UnitScale {
    if number == 0.0 {
        return UnitScale::ZERO;
    }
    if !number.is_finite() {
        return UnitScale {
            value: number,
            depth: 0,
        };
    }

    let mut value = number.abs();
    let mut depth = 0u32;

    while value >= 1000.0 && depth < max_depth {
        value /= 1000.0;
        depth += 1;
    }

    if value >= 1000.0 {
        tracing::debug!(
            "Magnitude of {} exceeds unit depth {}, clamping suffix",
            number,
            max_depth
        );
    }

    UnitScale {
        value: value.copysign(number),
        depth,
    }
}
