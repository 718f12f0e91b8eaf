//! Geometry helpers: value ranges, terminal size plumbing and the width
//! of numeric labels.

use terminal_size::{Width, terminal_size};

use crate::core::constants::{
    ENCLOSURE_WIDTH, FALLBACK_TERMINAL_WIDTH, SIGNIFICANT_DIGITS,
};

/// Inclusive `(min, max)` over the finite samples.
///
/// * If the series is empty or contains only non-finite values the
///   fallback is `(0.0, 1.0)`.
/// * A flat series returns `low == high`; the quantizer treats that as a
///   degenerate range, so no padding is added here.
#[must_use]
pub fn value_range(data: &[f64]) -> (f64, f64) {
    let (low, high) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    (low, high)
}

/// Current terminal width in columns (80 when stdout is not a terminal).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(FALLBACK_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
}

/// Columns actually plotted: the request (or one column per sample when
/// `requested == 0`), clipped so the plot plus its box fits `terminal`.
#[inline]
#[must_use]
pub fn plot_columns(requested: usize, samples: usize, terminal: usize, boxed: bool) -> usize {
    let wanted = if requested == 0 { samples } else { requested };
    let available = if boxed {
        terminal.saturating_sub(ENCLOSURE_WIDTH)
    } else {
        terminal
    };
    wanted.min(available)
}

/// Number of characters needed to print `n` in base 10.
#[inline]
#[must_use]
pub fn decimal_width(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Format a value the way `%g` does: six significant digits, trailing
/// zeros dropped, scientific notation for very large or small magnitudes.
#[must_use]
pub fn value_label(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    if !v.is_finite() {
        return v.to_string();
    }

    let digits = SIGNIFICANT_DIGITS as i32;
    let exp = v.abs().log10().floor() as i32;
    if exp < -5 || exp >= digits {
        let s = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, v);
        return match s.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{exponent}", trim_zeros(mantissa)),
            None => s,
        };
    }

    let decimals = (digits - 1 - exp).max(0) as usize;
    trim_zeros(&format!("{v:.decimals$}")).to_owned()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
