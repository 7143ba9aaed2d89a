//! "Nice" tick generation for the radial value axis.
//!
//! The same algorithm serves every axis; there is no radar-specific variant.

use serde::{Deserialize, Serialize};

/// Computed tick set for one axis.
///
/// Zero ticks means "nothing to draw", never a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    pub values: Vec<f64>,
    pub count: usize,
    /// Fractional digits used when formatting tick labels.
    pub decimals: usize,
    /// Step between consecutive ticks (0 when the range is degenerate).
    pub interval: f64,
}

impl AxisTicks {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

}

/// Rounds `number` to its most significant digit.
///
/// `0.0123 -> 0.01`, `16.4 -> 20`, `250 -> 300`. Zero and non-finite inputs come back unchanged.
pub fn round_to_next_significant(number: f64) -> f64 {
    if number == 0.0 || !number.is_finite() {
        return number;
    }
    let d = number.abs().log10().ceil() as i32;
    let pw = 1 - d;
    // Multiplying/dividing by exact powers of ten keeps results like 20 or 0.2 exact.
    if pw >= 0 {
        let magnitude = 10f64.powi(pw);
        (number * magnitude).round() / magnitude
    } else {
        let magnitude = 10f64.powi(-pw);
        (number / magnitude).round() * magnitude
    }
}

/// Fractional digits for labels stepping by `interval`.
pub fn decimals_for_interval(interval: f64) -> usize {
    if interval > 0.0 && interval < 1.0 {
        (-interval.log10()).ceil().max(0.0) as usize
    } else {
        0
    }
}

/// Picks a readable step for splitting `range` into roughly `desired_count` parts.
fn nice_interval(range: f64, desired_count: usize) -> f64 {
    let raw_interval = range / desired_count as f64;
    let mut interval = round_to_next_significant(raw_interval);

    let magnitude = 10f64.powf(interval.log10().floor());
    let significant_digit = (interval / magnitude + 1e-9).floor();
    if significant_digit > 5.0 {
        // Steps like 0.9 or 90 read poorly; go one magnitude up instead.
        let bumped = 10.0 * magnitude;
        interval = if bumped >= 1.0 { bumped.floor() } else { bumped };
    }
    interval
}

/// Upper bound for the desired tick count; larger requests are clamped to it.
pub const MAX_TICK_COUNT: usize = 25;

/// Computes tick values between `min` and `max`.
///
/// `desired_count` is a hint: round intervals win over exact divisibility, so the returned count
/// can differ from it. A zero `desired_count` or a non-positive range yields no ticks; counts
/// above [`MAX_TICK_COUNT`] are clamped.
pub fn compute_ticks(min: f64, max: f64, desired_count: usize, only_min_max: bool) -> AxisTicks {
    let range = (max - min).abs();
    if desired_count == 0 || !(range > 0.0) || !range.is_finite() {
        return AxisTicks::empty();
    }
    if desired_count > MAX_TICK_COUNT {
        tracing::debug!(desired_count, max = MAX_TICK_COUNT, "clamping desired tick count");
    }
    let desired_count = desired_count.min(MAX_TICK_COUNT);

    let interval = nice_interval(range, desired_count);
    if !(interval > 0.0) || !interval.is_finite() {
        tracing::warn!(min, max, desired_count, "tick interval degenerated");
        return AxisTicks::empty();
    }

    let values = if only_min_max {
        vec![min, max]
    } else {
        let mut first = (min / interval).ceil() * interval;
        if first == 0.0 {
            // Normalize -0.0 so labels never read "-0".
            first = 0.0;
        }
        let last = ((max / interval).floor() * interval).next_up();

        let mut values = Vec::new();
        let mut i = 0usize;
        loop {
            let v = first + interval * i as f64;
            if v > last {
                break;
            }
            values.push(v);
            i += 1;
        }
        values
    };

    let decimals = decimals_for_interval(interval);
    tracing::trace!(min, max, desired_count, interval, count = values.len(), "ticks computed");
    AxisTicks {
        count: values.len(),
        values,
        decimals,
        interval,
    }
}
