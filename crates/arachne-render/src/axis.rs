//! Axis models: configuration plus state derived from the current data.
//!
//! Derived state is only ever replaced as a whole by `recompute`-style calls, so a reader never
//! sees ticks from one data snapshot next to bounds from another.

use crate::options::{CategoryAxisConfig, RadialAxisConfig};
use crate::text::{TextMeasurer, TextStyle};
use arachne_core::geom::{self, Point};
use arachne_core::{AxisTicks, ValueFormatter, compute_ticks};
use serde::{Deserialize, Serialize};

/// Resolved bounds and ticks of the radial axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadialAxisState {
    pub minimum: f64,
    pub maximum: f64,
    /// `|maximum - minimum|`; may be 0 for single-valued data.
    pub range: f64,
    pub ticks: AxisTicks,
}

/// The value axis running from the center out along every spoke.
#[derive(Debug, Clone, Default)]
pub struct RadialAxis {
    config: RadialAxisConfig,
    state: RadialAxisState,
}

impl RadialAxis {
    pub fn new(config: RadialAxisConfig) -> Self {
        Self {
            config,
            state: RadialAxisState::default(),
        }
    }

    pub fn config(&self) -> &RadialAxisConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut RadialAxisConfig {
        &mut self.config
    }

    pub fn state(&self) -> &RadialAxisState {
        &self.state
    }

    pub fn axis_minimum(&self) -> f64 {
        self.state.minimum
    }

    pub fn axis_maximum(&self) -> f64 {
        self.state.maximum
    }

    pub fn axis_range(&self) -> f64 {
        self.state.range
    }

    pub fn ticks(&self) -> &AxisTicks {
        &self.state.ticks
    }

    /// Resolves bounds for data spanning `data_min..=data_max` and computes fresh ticks.
    ///
    /// Explicit overrides win verbatim. Otherwise the data bounds are padded by `space_top` and
    /// `space_bottom` percent of the value range, and `start_at_zero` pins the minimum to 0.
    pub fn recompute(&mut self, data_min: f64, data_max: f64) {
        let cfg = &self.config;
        let basis = (data_max - if cfg.start_at_zero { 0.0 } else { data_min }).abs();
        let top_space = basis / 100.0 * cfg.space_top;
        let bottom_space = basis / 100.0 * cfg.space_bottom;

        let mut minimum = data_min - bottom_space;
        let mut maximum = data_max + top_space;
        if cfg.start_at_zero {
            minimum = 0.0;
        }
        if let Some(min) = cfg.min {
            minimum = min;
        }
        if let Some(max) = cfg.max {
            maximum = max;
        }

        let range = (maximum - minimum).abs();
        if range == 0.0 {
            tracing::warn!(minimum, maximum, "radial axis range is degenerate");
        }
        let ticks = compute_ticks(minimum, maximum, cfg.label_count, cfg.show_only_min_max);
        tracing::debug!(minimum, maximum, ticks = ticks.count, "radial axis recomputed");

        self.state = RadialAxisState {
            minimum,
            maximum,
            range,
            ticks,
        };
    }

    /// Drops derived state (no data).
    pub fn clear(&mut self) {
        self.state = RadialAxisState::default();
    }

    /// Range used for pixel scaling: a zero range counts as 1.
    pub fn scaling_range(&self) -> f64 {
        if self.state.range > 0.0 && self.state.range.is_finite() {
            self.state.range
        } else {
            1.0
        }
    }

    /// Label text of tick `index`, formatted to the tick precision.
    pub fn formatted_label(&self, index: usize) -> Option<String> {
        let value = self.state.ticks.values.get(index)?;
        Some(ValueFormatter::new(self.state.ticks.decimals).format(*value))
    }
}

/// The angular axis: one spoke and one label per category.
#[derive(Debug, Clone, Default)]
pub struct CategoryAxis {
    config: CategoryAxisConfig,
    labels: Vec<String>,
    label_width: f64,
    label_height: f64,
    label_positions: Vec<Point>,
}

impl CategoryAxis {
    pub fn new(config: CategoryAxisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CategoryAxisConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut CategoryAxisConfig {
        &mut self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Measured width of the sample label box, device pixels.
    pub fn label_width(&self) -> f64 {
        self.label_width
    }

    pub fn label_height(&self) -> f64 {
        self.label_height
    }

    /// Last computed screen position of every label, in category order.
    pub fn label_positions(&self) -> &[Point] {
        &self.label_positions
    }

    /// Takes over `labels` and re-measures the label box.
    ///
    /// The box is measured on a filler string of `round(average_len + space_between_labels)`
    /// glyphs rather than on each real label: an approximation that keeps geometry independent
    /// of text shaping.
    pub fn update_labels(
        &mut self,
        labels: Vec<String>,
        average_len: f64,
        style: &TextStyle,
        measurer: &dyn TextMeasurer,
    ) {
        let filler = filler_label(average_len, self.config.space_between_labels);
        self.label_width = measurer.measure_width(&filler, style);
        self.label_height = measurer.text_box_height(style);
        self.labels = labels;
        self.label_positions.clear();
        tracing::trace!(
            width = self.label_width,
            height = self.label_height,
            "category label box measured"
        );
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.label_positions.clear();
        self.label_width = 0.0;
        self.label_height = 0.0;
    }

    pub(crate) fn replace_label_positions(&mut self, positions: Vec<Point>) {
        self.label_positions = positions;
    }

    /// Index of the first cached label within `max_distance` of `p`.
    pub fn label_near(&self, p: Point, max_distance: f64) -> Option<usize> {
        self.label_positions
            .iter()
            .position(|lp| geom::distance(*lp, p) <= max_distance)
    }
}

/// `"h"` repeated `round(average_len + space)` times.
pub fn filler_label(average_len: f64, space: usize) -> String {
    let n = (average_len + space as f64).round();
    let n = if n.is_finite() && n > 0.0 { n as usize } else { 0 };
    "h".repeat(n)
}
