//! The radar chart: single owner of data, rotation, axes and viewport.
//!
//! Every mutation runs the full recompute sequence before returning (bounds, ticks, label box,
//! offsets, label positions), so queries and layouts always see one consistent snapshot.

use crate::axis::{CategoryAxis, RadialAxis};
use crate::host::{PolarChartHost, RadarFrame};
use crate::layout::{category_label_positions, layout_radar};
use crate::model::RadarLayout;
use crate::options::{CategoryAxisConfig, ChartOptions, RadialAxisConfig};
use crate::surface::DrawSurface;
use crate::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};
use crate::viewport::{Insets, OffsetRequest, Viewport, negotiate};
use arachne_core::geom::{self, Point, Rect};
use arachne_core::{AxisDependency, ChartData, Density, Entry, ValueFormatter};
use std::sync::Arc;

type SelectionListener = Box<dyn FnMut(usize)>;

pub struct RadarChart {
    data: Option<ChartData>,
    options: ChartOptions,
    measurer: Arc<dyn TextMeasurer + Send + Sync>,
    radial_axis: RadialAxis,
    category_axis: CategoryAxis,
    raw_rotation: f64,
    rotation: f64,
    viewport: Viewport,
    value_formatter: ValueFormatter,
    selection_listener: Option<SelectionListener>,
}

impl std::fmt::Debug for RadarChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadarChart")
            .field("data", &self.data)
            .field("options", &self.options)
            .field("radial_axis", &self.radial_axis)
            .field("category_axis", &self.category_axis)
            .field("raw_rotation", &self.raw_rotation)
            .field("rotation", &self.rotation)
            .field("viewport", &self.viewport)
            .field("value_formatter", &self.value_formatter)
            .field("has_selection_listener", &self.selection_listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for RadarChart {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}

impl RadarChart {
    pub fn new(options: ChartOptions) -> Self {
        Self::with_text_measurer(options, Arc::new(DeterministicTextMeasurer::default()))
    }

    pub fn with_text_measurer(
        options: ChartOptions,
        measurer: Arc<dyn TextMeasurer + Send + Sync>,
    ) -> Self {
        let mut chart = Self {
            data: None,
            radial_axis: RadialAxis::new(options.radial_axis.clone()),
            category_axis: CategoryAxis::new(options.category_axis.clone()),
            raw_rotation: options.rotation,
            rotation: geom::normalize_angle(options.rotation),
            viewport: Viewport::default(),
            value_formatter: ValueFormatter::default(),
            selection_listener: None,
            measurer,
            options,
        };
        chart.notify_data_changed();
        chart
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Replaces the chart data wholesale and recomputes everything derived from it.
    pub fn set_data(&mut self, data: ChartData) {
        self.value_formatter = ValueFormatter::for_range(
            data.y_min(None),
            data.y_max(None),
            data.category_count(),
        );
        tracing::debug!(
            categories = data.category_count(),
            series = data.data_set_count(),
            decimals = self.value_formatter.decimals,
            "chart data set"
        );
        self.data = Some(data);
        self.notify_data_changed();
    }

    /// Drops the data; the chart falls back to its placeholder.
    pub fn clear(&mut self) {
        self.data = None;
        self.notify_data_changed();
    }

    pub fn data(&self) -> Option<&ChartData> {
        self.data.as_ref()
    }

    /// True when there is data with at least one category.
    pub fn has_data(&self) -> bool {
        self.plotted_data().is_some()
    }

    fn plotted_data(&self) -> Option<&ChartData> {
        self.data.as_ref().filter(|d| !d.is_empty())
    }

    /// Sets the rotation in degrees. Any value is accepted; [`RadarChart::rotation_angle`]
    /// reports it normalized.
    pub fn set_rotation(&mut self, angle: f64) {
        self.raw_rotation = angle;
        self.rotation = geom::normalize_angle(angle);
        self.notify_data_changed();
    }

    /// Rotation exactly as last set, unbounded.
    pub fn raw_rotation_angle(&self) -> f64 {
        self.raw_rotation
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.options.width = width;
        self.options.height = height;
        self.notify_data_changed();
    }

    pub fn set_density(&mut self, density: Density) {
        self.options.density = density;
        self.notify_data_changed();
    }

    pub fn density(&self) -> Density {
        self.options.density
    }

    pub fn set_extra_offsets(&mut self, offsets: Insets) {
        self.options.extra_offsets = offsets;
        self.notify_data_changed();
    }

    pub fn set_web_enabled(&mut self, draw: bool) {
        self.options.web.draw = draw;
    }

    pub fn set_no_data_text(&mut self, text: impl Into<String>) {
        self.options.no_data_text = text.into();
    }

    pub fn set_no_data_description(&mut self, text: Option<String>) {
        self.options.no_data_description = text;
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.options.touch_enabled = enabled;
    }

    pub fn radial_axis(&self) -> &RadialAxis {
        &self.radial_axis
    }

    pub fn category_axis(&self) -> &CategoryAxis {
        &self.category_axis
    }

    /// Edits the radial axis configuration, then recomputes.
    pub fn update_radial_axis(&mut self, f: impl FnOnce(&mut RadialAxisConfig)) {
        f(&mut self.options.radial_axis);
        *self.radial_axis.config_mut() = self.options.radial_axis.clone();
        self.notify_data_changed();
    }

    /// Edits the category axis configuration, then recomputes.
    pub fn update_category_axis(&mut self, f: impl FnOnce(&mut CategoryAxisConfig)) {
        f(&mut self.options.category_axis);
        *self.category_axis.config_mut() = self.options.category_axis.clone();
        self.notify_data_changed();
    }

    /// Registers the callback told about every touch-resolved category index.
    pub fn set_selection_listener(&mut self, listener: impl FnMut(usize) + 'static) {
        self.selection_listener = Some(Box::new(listener));
    }

    pub fn clear_selection_listener(&mut self) {
        self.selection_listener = None;
    }

    /// Re-runs the recompute sequence: axis bounds and ticks, category label box, offsets, then
    /// label positions. Each step replaces its previous result.
    pub fn notify_data_changed(&mut self) {
        let density = self.options.density;
        let label_style =
            TextStyle::sized(density.to_device_pixels(self.options.category_axis.text_size));

        match self.data.as_ref().filter(|d| !d.is_empty()) {
            Some(data) => {
                self.radial_axis.recompute(
                    data.y_min(Some(AxisDependency::Left)),
                    data.y_max(Some(AxisDependency::Left)),
                );
                self.category_axis.update_labels(
                    data.categories().to_vec(),
                    data.average_category_label_length(),
                    &label_style,
                    self.measurer.as_ref(),
                );
            }
            None => {
                self.radial_axis.clear();
                self.category_axis.clear();
            }
        }

        self.viewport = negotiate(&OffsetRequest {
            width: self.options.width,
            height: self.options.height,
            min_offset: density.to_device_pixels(self.options.min_offset),
            category_axis_enabled: self.category_axis.is_enabled(),
            category_label_width: self.category_axis.label_width(),
            extra: self.options.extra_offsets.scaled(density.scale),
        });

        let positions = match self.slice_angle() {
            Some(slice) => category_label_positions(
                &*self,
                self.radius(),
                slice,
                self.category_axis.labels().len(),
                self.category_axis.label_width(),
            ),
            None => Vec::new(),
        };
        self.category_axis.replace_label_positions(positions);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Degrees per category; `None` without categories.
    pub fn slice_angle(&self) -> Option<f64> {
        let n = self.plotted_data()?.category_count();
        Some(360.0 / n as f64)
    }

    /// Pixels per value unit along a spoke.
    pub fn factor(&self) -> f64 {
        self.radius() / self.radial_axis.scaling_range()
    }

    pub fn y_chart_min(&self) -> f64 {
        self.radial_axis.axis_minimum()
    }

    pub fn y_chart_max(&self) -> f64 {
        self.radial_axis.axis_maximum()
    }

    pub fn y_range(&self) -> f64 {
        self.radial_axis.axis_range()
    }

    /// Category whose slice contains `angle`; `None` without categories.
    ///
    /// Slice `i` ends half a slice past its own spoke, so category 0 owns the region straddling
    /// the rotation reference.
    pub fn category_index_for_angle(&self, angle: f64) -> Option<usize> {
        let slice = self.slice_angle()?;
        let n = self.plotted_data()?.category_count();
        let a = geom::normalize_angle(angle - self.rotation);
        Some(
            (0..n)
                .find(|&i| slice * (i + 1) as f64 - slice / 2.0 > a)
                .unwrap_or(0),
        )
    }

    pub fn category_label_at(&self, index: usize) -> Option<&str> {
        self.data.as_ref()?.category_label(index)
    }

    /// Every entry at `index`, paired with its series index.
    pub fn entries_at_category(&self, index: usize) -> Vec<(usize, &Entry)> {
        self.data
            .as_ref()
            .map(|d| d.entries_at_category(index))
            .unwrap_or_default()
    }

    /// Resolves a touch at `(x, y)` to a category.
    ///
    /// A label within `max_touch_distance` wins; otherwise a point inside the web resolves by
    /// angle. Returns whether a category was selected; the listener hears about it first.
    pub fn handle_touch(&mut self, x: f64, y: f64) -> bool {
        let Some(index) = self.select_at(x, y) else {
            return false;
        };
        tracing::debug!(x, y, index, "category selected");
        if let Some(listener) = self.selection_listener.as_mut() {
            listener(index);
        }
        true
    }

    /// The category a touch at `(x, y)` would select, without notifying anyone.
    pub fn select_at(&self, x: f64, y: f64) -> Option<usize> {
        if !self.options.touch_enabled || !self.has_data() {
            return None;
        }
        let p = geom::point(x, y);
        if let Some(i) = self
            .category_axis
            .label_near(p, self.options.max_touch_distance)
        {
            return Some(i);
        }
        if self.distance_to_center(x, y) > self.radius() {
            return None;
        }
        let angle = self.angle_for_point(x, y);
        if angle.is_nan() {
            return None;
        }
        self.category_index_for_angle(angle)
    }

    /// Immutable snapshot of the current state for layout.
    pub fn frame(&self) -> RadarFrame<'_> {
        RadarFrame {
            data: self.data.as_ref(),
            options: &self.options,
            radial_axis: &self.radial_axis,
            category_axis: &self.category_axis,
            viewport: &self.viewport,
            rotation: self.rotation,
            slice_angle: self.slice_angle(),
            factor: self.factor(),
            value_formatter: self.value_formatter,
        }
    }

    pub fn layout(&self) -> RadarLayout {
        layout_radar(&self.frame(), self.measurer.as_ref())
    }

    /// Lays out the current frame and draws it onto `surface`.
    pub fn draw(&self, surface: &mut dyn DrawSurface) -> RadarLayout {
        let layout = self.layout();
        crate::draw::draw_layout(&layout, surface);
        layout
    }
}

impl PolarChartHost for RadarChart {
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

#[cfg(test)]
mod tests {
    use super::*;
    use arachne_core::DataSet;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn chart_with(categories: usize) -> RadarChart {
        let labels = (0..categories).map(|i| format!("C{i}")).collect();
        let values = (0..categories).map(|i| 10.0 * (i + 1) as f64);
        let data = ChartData::new(labels, vec![DataSet::from_values("s", values)]).unwrap();
        let mut chart = RadarChart::default();
        chart.set_data(data);
        chart
    }

    #[test]
    fn no_data_queries_are_total() {
        let mut chart = RadarChart::default();
        assert!(!chart.has_data());
        assert_eq!(chart.slice_angle(), None);
        assert_eq!(chart.category_index_for_angle(12.0), None);
        assert!(chart.entries_at_category(0).is_empty());
        assert!(!chart.handle_touch(200.0, 200.0));
        assert!(chart.factor().is_finite());

        chart.set_data(ChartData::empty());
        assert!(!chart.has_data());
        assert!(chart.layout().no_data.is_some());
    }

    #[test]
    fn slices_cover_the_circle() {
        for n in 1..=12 {
            let chart = chart_with(n);
            let slice = chart.slice_angle().unwrap();
            assert!((slice * n as f64 - 360.0).abs() < 1e-9);
        }
    }

    #[test]
    fn category_index_is_total_and_bounded() {
        let chart = chart_with(5);
        let mut a = 0.0;
        while a < 360.0 {
            let i = chart.category_index_for_angle(a).unwrap();
            assert!(i < 5, "{a} -> {i}");
            a += 0.25;
        }
    }

    #[test]
    fn category_zero_straddles_the_rotation_reference() {
        let chart = chart_with(4);
        // rotation 270: slice 90, category 0 owns 225..315
        assert_eq!(chart.category_index_for_angle(230.0), Some(0));
        assert_eq!(chart.category_index_for_angle(300.0), Some(0));
        assert_eq!(chart.category_index_for_angle(0.0), Some(1));
        assert_eq!(chart.category_index_for_angle(180.0), Some(3));
    }

    #[test]
    fn label_angles_round_trip_to_their_category() {
        let mut chart = chart_with(7);
        for rotation in [270.0, 0.0, -33.0, 725.5] {
            chart.set_rotation(rotation);
            let center = chart.center();
            for (i, p) in chart.category_axis().label_positions().iter().enumerate() {
                let angle = geom::angle_for_point(center, *p);
                assert_eq!(chart.category_index_for_angle(angle), Some(i), "rot {rotation}");
            }
        }
    }

    #[test]
    fn rotation_keeps_raw_and_normalized() {
        let mut chart = chart_with(3);
        chart.set_rotation(-450.0);
        assert_eq!(chart.raw_rotation_angle(), -450.0);
        assert_eq!(chart.rotation_angle(), 270.0);
        chart.set_rotation(1000.0);
        assert_eq!(chart.raw_rotation_angle(), 1000.0);
        assert_eq!(chart.rotation_angle(), 280.0);
    }

    #[test]
    fn factor_scales_range_to_radius() {
        let chart = chart_with(3);
        assert!((chart.factor() * chart.y_range() - chart.radius()).abs() < 1e-9);
        assert_eq!(chart.diameter(), chart.radius() * 2.0);
    }

    #[test]
    fn touch_prefers_labels_then_angle() {
        let mut chart = chart_with(4);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        chart.set_selection_listener(move |i| sink.borrow_mut().push(i));

        let label = chart.category_axis().label_positions()[2];
        assert!(chart.handle_touch(label.x, label.y));

        // just right of center along the east spoke (category 1 at rotation 270)
        let c = chart.center();
        assert!(chart.handle_touch(c.x + 20.0, c.y));

        // far corner: outside both the web and every label radius
        assert!(!chart.handle_touch(0.0, 0.0));
        assert_eq!(*seen.borrow(), vec![2, 1]);

        chart.set_touch_enabled(false);
        assert!(!chart.handle_touch(label.x, label.y));
    }

    #[test]
    fn axis_updates_recompute_immediately() {
        let mut chart = chart_with(3);
        chart.update_radial_axis(|cfg| cfg.set_axis_max(1000.0));
        assert_eq!(chart.y_chart_max(), 1000.0);
        chart.update_radial_axis(|cfg| cfg.reset_axis_max());
        assert_eq!(chart.y_chart_max(), 33.0);
    }

    #[test]
    fn disabling_category_axis_shrinks_offsets() {
        let mut chart = chart_with(3);
        chart.update_category_axis(|cfg| cfg.space_between_labels = 20);
        let wide = chart.viewport().offsets.left;
        chart.update_category_axis(|cfg| cfg.enabled = false);
        assert!(chart.viewport().offsets.left < wide);
        assert_eq!(chart.viewport().offsets.left, 10.0);
    }
}
