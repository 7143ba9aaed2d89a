//! The narrow view of a chart that polar layout and hit-testing depend on.

use crate::axis::{CategoryAxis, RadialAxis};
use crate::options::ChartOptions;
use crate::viewport::Viewport;
use arachne_core::geom::{self, Point, Rect};
use arachne_core::{ChartData, ValueFormatter};

/// Capabilities of a chart laid out around a center point.
pub trait PolarChartHost {
    fn center(&self) -> Point;

    fn content_rect(&self) -> Rect;

    /// Normalized rotation, degrees in `[0, 360)`.
    fn rotation_angle(&self) -> f64;

    /// Half of the shorter content side.
    fn radius(&self) -> f64 {
        let r = self.content_rect();
        r.size.width.min(r.size.height) / 2.0
    }

    fn diameter(&self) -> f64 {
        let r = self.content_rect();
        r.size.width.min(r.size.height)
    }

    fn distance_to_center(&self, x: f64, y: f64) -> f64 {
        geom::distance(self.center(), geom::point(x, y))
    }

    /// Angle of `(x, y)` around [`PolarChartHost::center`]; NaN at the center itself.
    fn angle_for_point(&self, x: f64, y: f64) -> f64 {
        geom::angle_for_point(self.center(), geom::point(x, y))
    }
}

/// Immutable snapshot of everything one frame is laid out from.
///
/// Borrowed from a [`crate::RadarChart`] after its recompute step, so every field belongs to the
/// same data snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RadarFrame<'a> {
    pub data: Option<&'a ChartData>,
    pub options: &'a ChartOptions,
    pub radial_axis: &'a RadialAxis,
    pub category_axis: &'a CategoryAxis,
    pub viewport: &'a Viewport,
    pub rotation: f64,
    /// `None` without categories.
    pub slice_angle: Option<f64>,
    pub factor: f64,
    pub value_formatter: ValueFormatter,
}

impl RadarFrame<'_> {
    /// Data with at least one category, if any.
    pub fn plotted_data(&self) -> Option<&ChartData> {
        self.data.filter(|d| !d.is_empty())
    }

    pub fn to_device_pixels(&self, logical: f64) -> f64 {
        self.options.density.to_device_pixels(logical)
    }
}

impl PolarChartHost for RadarFrame<'_> {
    fn center(&self) -> Point {
        self.viewport.center()
    }

    fn content_rect(&self) -> Rect {
        self.viewport.content
    }

    fn rotation_angle(&self) -> f64 {
        self.rotation
    }
}
