// ============================================================================
// Decimal Policies
// fixed / flex / smart rendering of a single value
// ============================================================================

use crate::domain::{DecimalSpec, Policy};
use crate::interfaces::NumberLocale;
use regex::Regex;
use std::sync::LazyLock;

/// Fractional digits rendered before scanning for 0/9 runs
const SMART_SCAN_DIGITS: usize = 12;

/// Values at or above this magnitude skip the run scan
const SMART_SCAN_LIMIT: f64 = 30.0;

/// A run of two or more 0s or 9s right after the decimal point, then the rest.
static BOUNDARY_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(0{2,}|9{2,})(\d*)").expect("valid boundary run pattern"));

/// Exactly `decimals` digits, grouped, never trimmed. Zero renders as "".
pub fn fixed(locale: &dyn NumberLocale, number: f64, decimals: u32) -> String {
    if number == 0.0 {
        return String::new();
    }
    locale.format_grouped(number, decimals)
}

/// `fixed`, then trailing fractional zeros and a bare decimal point removed.
///
/// - 38 020.00 -> 38 020
/// - 38 020.00100 -> 38 020.001
pub fn flex(locale: &dyn NumberLocale, number: f64, decimals: u32) -> String {
    let mut text = fixed(locale, number, decimals);

    let point = locale.separators().decimal_point;
    if text.contains(point) {
        let trimmed = text.trim_end_matches('0');
        let len = trimmed.strip_suffix(point).unwrap_or(trimmed).len();
        text.truncate(len);
    }

    text
}

/// Keep `show_decimals` significant digits past any leading run of 0s or 9s.
///
/// - 0.0000000123 @ 2 -> 0.000000012
/// - 0.0123 @ 2 -> 0.0123
/// - 2.999951132432 @ 2 -> 2.999951
pub fn smart(locale: &dyn NumberLocale, number: f64, show_decimals: u32) -> String {
    if number == 0.0 {
        return String::new();
    }

    let abs = number.abs();
    let mut show = show_decimals;
    let mut decimals = show_decimals;

    if abs < 0.1 {
        decimals = decimals.saturating_add(2);
        show = 2;
    } else if abs < 1.0 {
        decimals = decimals.saturating_add(1);
        show = 2;
    }

    if abs < SMART_SCAN_LIMIT && show > 1 {
        if let Some(len) = boundary_run_width(abs, show) {
            decimals = len;
        }
    }

    flex(locale, number, decimals)
}

/// Width of the 0/9 run plus up to `show` trailing digits, if the
/// fraction starts with such a run.
fn boundary_run_width(abs: f64, show: u32) -> Option<u32> {
    let text = format!("{:.*}", SMART_SCAN_DIGITS, abs);
    let caps = BOUNDARY_RUN.captures(&text)?;

    let run = caps.get(1)?.as_str().len();
    let tail = caps.get(2).map_or(0, |m| m.as_str().len());

    // With nothing after the run, the last run digit stands in for the tail.
    let width = if tail == 0 {
        run
    } else {
        run + tail.min(show as usize)
    };

    Some(width as u32)
}

/// Dispatch on `spec.policy`.
pub fn format(locale: &dyn NumberLocale, number: f64, spec: DecimalSpec) -> String {
    match spec.policy {
        Policy::Fixed => fixed(locale, number, spec.decimals),
        Policy::Flex => flex(locale, number, spec.decimals),
        Policy::Smart => smart(locale, number, spec.decimals),
    }
}
