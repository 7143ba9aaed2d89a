//! Typed views of a [`ChartConfig`] tree.
//!
//! Sizes here are logical units unless noted; the chart converts them with its [`Density`].

use crate::Result;
use crate::viewport::Insets;
use arachne_core::ticks::MAX_TICK_COUNT;
use arachne_core::{ChartConfig, Color, Density};
use serde::{Deserialize, Serialize};

/// Smallest tick count resolved from configuration.
pub const MIN_LABEL_COUNT: usize = 2;

/// Radial (value) axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialAxisConfig {
    pub enabled: bool,
    pub draw_labels: bool,
    pub draw_top_label: bool,
    /// Desired tick count; a hint, see [`arachne_core::compute_ticks`]. Configuration resolves it
    /// into `2..=25`.
    pub label_count: usize,
    /// Explicit minimum. `None` derives it from the data.
    pub min: Option<f64>,
    /// Explicit maximum. `None` derives it from the data.
    pub max: Option<f64>,
    pub start_at_zero: bool,
    pub show_only_min_max: bool,
    /// Padding above the data maximum, percent of the value range.
    pub space_top: f64,
    /// Padding below the data minimum, percent of the value range.
    pub space_bottom: f64,
    pub text_size: f64,
    pub text_color: Color,
    pub x_offset: f64,
}

impl Default for RadialAxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            draw_labels: true,
            draw_top_label: true,
            label_count: 6,
            min: None,
            max: None,
            start_at_zero: true,
            show_only_min_max: false,
            space_top: 10.0,
            space_bottom: 10.0,
            text_size: 10.0,
            text_color: Color::BLACK,
            x_offset: 10.0,
        }
    }
}

impl RadialAxisConfig {
    /// Sets the explicit minimum; NaN means "derive from data".
    pub fn set_axis_min(&mut self, min: f64) {
        self.min = (!min.is_nan()).then_some(min);
    }

    /// Sets the explicit maximum; NaN means "derive from data".
    pub fn set_axis_max(&mut self, max: f64) {
        self.max = (!max.is_nan()).then_some(max);
    }

    pub fn reset_axis_min(&mut self) {
        self.min = None;
    }

    pub fn reset_axis_max(&mut self) {
        self.max = None;
    }

    fn from_config(cfg: &ChartConfig) -> Result<Self> {
        let d = Self::default();
        let finite = |path: &str| cfg.get_f64(path).filter(|v| !v.is_nan());
        Ok(Self {
            enabled: cfg.bool_or("radialAxis.enabled", d.enabled),
            draw_labels: cfg.bool_or("radialAxis.drawLabels", d.draw_labels),
            draw_top_label: cfg.bool_or("radialAxis.drawTopLabel", d.draw_top_label),
            label_count: cfg
                .usize_or("radialAxis.labelCount", d.label_count)
                .clamp(MIN_LABEL_COUNT, MAX_TICK_COUNT),
            min: finite("radialAxis.min"),
            max: finite("radialAxis.max"),
            start_at_zero: cfg.bool_or("radialAxis.startAtZero", d.start_at_zero),
            show_only_min_max: cfg.bool_or("radialAxis.showOnlyMinMax", d.show_only_min_max),
            space_top: cfg.f64_or("radialAxis.spaceTop", d.space_top),
            space_bottom: cfg.f64_or("radialAxis.spaceBottom", d.space_bottom),
            text_size: cfg.f64_or("radialAxis.textSize", d.text_size),
            text_color: cfg.color_or("radialAxis.textColor", d.text_color)?,
            x_offset: cfg.f64_or("radialAxis.xOffset", d.x_offset),
        })
    }
}

/// Category (angular) axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxisConfig {
    pub enabled: bool,
    pub draw_labels: bool,
    pub text_size: f64,
    pub text_color: Color,
    /// Extra filler glyphs added to the sample label used for box sizing.
    pub space_between_labels: usize,
}

impl Default for CategoryAxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            draw_labels: true,
            text_size: 10.0,
            text_color: Color::BLACK,
            space_between_labels: 0,
        }
    }
}

impl CategoryAxisConfig {
    fn from_config(cfg: &ChartConfig) -> Result<Self> {
        let d = Self::default();
        Ok(Self {
            enabled: cfg.bool_or("categoryAxis.enabled", d.enabled),
            draw_labels: cfg.bool_or("categoryAxis.drawLabels", d.draw_labels),
            text_size: cfg.f64_or("categoryAxis.textSize", d.text_size),
            text_color: cfg.color_or("categoryAxis.textColor", d.text_color)?,
            space_between_labels: cfg
                .usize_or("categoryAxis.spaceBetweenLabels", d.space_between_labels),
        })
    }
}

/// Web (grid) styling: spokes and concentric rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebStyle {
    pub draw: bool,
    /// Spoke width.
    pub line_width: f64,
    /// Ring width.
    pub inner_line_width: f64,
    pub color: Color,
    pub inner_color: Color,
    pub alpha: u8,
}

impl Default for WebStyle {
    fn default() -> Self {
        Self {
            draw: true,
            line_width: 1.5,
            inner_line_width: 0.75,
            color: Color::WEB_GRAY,
            inner_color: Color::WEB_GRAY,
            alpha: 150,
        }
    }
}

impl WebStyle {
    fn from_config(cfg: &ChartConfig) -> Result<Self> {
        let d = Self::default();
        Ok(Self {
            draw: cfg.bool_or("web.draw", d.draw),
            line_width: cfg.f64_or("web.lineWidth", d.line_width),
            inner_line_width: cfg.f64_or("web.innerLineWidth", d.inner_line_width),
            color: cfg.color_or("web.color", d.color)?,
            inner_color: cfg.color_or("web.innerColor", d.inner_color)?,
            alpha: cfg.alpha_or("web.alpha", d.alpha),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelStyle {
    pub text_size: f64,
    /// Upward shift from the plotted point.
    pub offset: f64,
}

impl Default for ValueLabelStyle {
    fn default() -> Self {
        Self {
            text_size: 8.0,
            offset: 5.0,
        }
    }
}

/// Everything a [`crate::RadarChart`] reads from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Chart size in device pixels.
    pub width: f64,
    pub height: f64,
    pub density: Density,
    /// Initial rotation in degrees.
    pub rotation: f64,
    pub min_offset: f64,
    pub extra_offsets: Insets,
    pub no_data_text: String,
    pub no_data_description: Option<String>,
    pub touch_enabled: bool,
    /// Label proximity radius for touch selection, device pixels.
    pub max_touch_distance: f64,
    pub web: WebStyle,
    pub radial_axis: RadialAxisConfig,
    pub category_axis: CategoryAxisConfig,
    pub values: ValueLabelStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            density: Density::default(),
            rotation: 270.0,
            min_offset: 10.0,
            extra_offsets: Insets::default(),
            no_data_text: "No chart data available.".to_string(),
            no_data_description: None,
            touch_enabled: true,
            max_touch_distance: 50.0,
            web: WebStyle::default(),
            radial_axis: RadialAxisConfig::default(),
            category_axis: CategoryAxisConfig::default(),
            values: ValueLabelStyle::default(),
        }
    }
}

impl ChartOptions {
    /// Resolves typed options from `cfg`; keys missing from `cfg` keep their defaults.
    pub fn from_config(cfg: &ChartConfig) -> Result<Self> {
        let d = Self::default();
        let extra = Insets {
            left: cfg.f64_or("extraOffsets.left", 0.0),
            top: cfg.f64_or("extraOffsets.top", 0.0),
            right: cfg.f64_or("extraOffsets.right", 0.0),
            bottom: cfg.f64_or("extraOffsets.bottom", 0.0),
        };
        Ok(Self {
            width: cfg.f64_or("width", d.width),
            height: cfg.f64_or("height", d.height),
            density: Density::new(cfg.f64_or("density", 1.0)),
            rotation: cfg.f64_or("rotation", d.rotation),
            min_offset: cfg.f64_or("minOffset", d.min_offset),
            extra_offsets: extra,
            no_data_text: cfg
                .get_str("noDataText")
                .map(str::to_string)
                .unwrap_or(d.no_data_text),
            no_data_description: cfg.get_str("noDataDescription").map(str::to_string),
            touch_enabled: cfg.bool_or("touchEnabled", d.touch_enabled),
            max_touch_distance: cfg.f64_or("maxTouchDistance", d.max_touch_distance),
            web: WebStyle::from_config(cfg)?,
            radial_axis: RadialAxisConfig::from_config(cfg)?,
            category_axis: CategoryAxisConfig::from_config(cfg)?,
            values: ValueLabelStyle {
                text_size: cfg.f64_or("values.textSize", d.values.text_size),
                offset: cfg.f64_or("values.offset", d.values.offset),
            },
        })
    }
}
