use crate::ticks::round_to_next_significant;

/// Digits used when a reference magnitude gives no usable answer (zero or non-finite).
pub const FALLBACK_VALUE_DECIMALS: usize = 1;

/// Fixed-precision number formatter used for tick and value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFormatter {
    pub decimals: usize,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            decimals: FALLBACK_VALUE_DECIMALS,
        }
    }
}

impl ValueFormatter {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Formatter sized for values spanning `min..=max` across `category_count` categories.
    ///
    /// With fewer than two categories the largest magnitude is the reference, otherwise the
    /// spread between `min` and `max`.
    pub fn for_range(min: f64, max: f64, category_count: usize) -> Self {
        let reference = if category_count < 2 {
            min.abs().max(max.abs())
        } else {
            (max - min).abs()
        };
        Self::new(decimals_for_reference(reference))
    }

    pub fn format(&self, value: f64) -> String {
        format_fixed(value, self.decimals)
    }
}

/// `ceil(-log10(round_to_next_significant(reference))) + 2`, clamped at zero.
pub fn decimals_for_reference(reference: f64) -> usize {
    let rounded = round_to_next_significant(reference.abs());
    if rounded == 0.0 || !rounded.is_finite() {
        return FALLBACK_VALUE_DECIMALS;
    }
    let digits = (-rounded.log10()).ceil() + 2.0;
    digits.max(0.0) as usize
}

/// Formats `value` with exactly `decimals` fractional digits; never yields "-0".
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let s = format!("{value:.decimals$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Compact number rendering for generated markup: at most three decimals, trailing zeros
/// stripped.
pub fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_format_uses_exact_digits() {
        assert_eq!(format_fixed(20.0, 0), "20");
        assert_eq!(format_fixed(0.2, 1), "0.2");
        assert_eq!(format_fixed(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(-1.5, 1), "-1.5");
    }

    #[test]
    fn reference_decimals_follow_magnitude() {
        assert_eq!(decimals_for_reference(100.0), 0);
        assert_eq!(decimals_for_reference(10.0), 1);
        assert_eq!(decimals_for_reference(0.5), 3);
        assert_eq!(decimals_for_reference(0.0), FALLBACK_VALUE_DECIMALS);
    }

    #[test]
    fn range_formatter_picks_reference() {
        // single category: magnitude of the largest value
        assert_eq!(ValueFormatter::for_range(-5.0, 200.0, 1).decimals, 0);
        // several categories: spread
        assert_eq!(ValueFormatter::for_range(100.0, 105.0, 3).decimals, 2);
    }

    #[test]
    fn fmt_number_trims() {
        assert_eq!(fmt_number(12.0), "12");
        assert_eq!(fmt_number(12.34567), "12.346");
        assert_eq!(fmt_number(-0.0001), "0");
        assert_eq!(fmt_number(f64::NAN), "0");
    }
}
