//! Frame layout: turns a [`RadarFrame`] into a [`RadarLayout`] of device-pixel primitives.
//!
//! Everything is a pure function of the frame; calling it twice yields the same layout.

use crate::host::{PolarChartHost, RadarFrame};
use crate::model::{
    LayoutPoint, LineLayout, NoDataLayout, RadarLayout, RingLayout, SeriesLayout, StrokeLayout,
    TextAlign, TextLayout, WebLayout,
};
use crate::text::{TextMeasurer, TextStyle};
use arachne_core::geom::{self, Point};
use arachne_core::{ChartData, Color, DataSet, ValueFormatter};

/// Font size of the no-data placeholder, logical units.
pub const NO_DATA_TEXT_SIZE: f64 = 12.0;
pub const NO_DATA_TEXT_COLOR: Color = Color::rgb(247, 189, 51);

/// Where category labels sit: just outside the web, half a label box further out.
///
/// These are the positions touch selection compares against.
pub fn category_label_positions(
    host: &impl PolarChartHost,
    web_radius: f64,
    slice_angle: f64,
    count: usize,
    label_width: f64,
) -> Vec<Point> {
    let center = host.center();
    let rotation = host.rotation_angle();
    (0..count)
        .map(|i| {
            let angle = (slice_angle * i as f64 + rotation) % 360.0;
            geom::position(center, web_radius + label_width / 2.0, angle)
        })
        .collect()
}

/// Polygon of `set`: one vertex per category in index order, skipping non-finite points.
pub fn series_polygon(
    host: &impl PolarChartHost,
    set: &DataSet,
    y_min: f64,
    factor: f64,
    slice_angle: f64,
) -> (Vec<Point>, Vec<usize>) {
    let center = host.center();
    let rotation = host.rotation_angle();

    let mut entries: Vec<_> = set.entries().iter().collect();
    entries.sort_by_key(|e| e.category_index);

    let mut points = Vec::with_capacity(entries.len());
    let mut categories = Vec::with_capacity(entries.len());
    for e in entries {
        let p = geom::position(
            center,
            (e.value - y_min) * factor,
            slice_angle * e.category_index as f64 + rotation,
        );
        if !geom::is_finite_point(p) {
            tracing::warn!(
                series = set.label(),
                category = e.category_index,
                "skipping point with non-finite coordinates"
            );
            continue;
        }
        points.push(p);
        categories.push(e.category_index);
    }
    (points, categories)
}

/// Lays out one frame.
pub fn layout_radar(frame: &RadarFrame<'_>, measurer: &dyn TextMeasurer) -> RadarLayout {
    let vp = frame.viewport;
    let axis = frame.radial_axis.state();
    let mut out = RadarLayout {
        width: vp.chart_width,
        height: vp.chart_height,
        offsets: vp.offsets,
        content: vp.content.into(),
        center: frame.center().into(),
        radius: frame.radius(),
        factor: frame.factor,
        rotation: frame.rotation,
        slice_angle: frame.slice_angle,
        y_min: axis.minimum,
        y_max: axis.maximum,
        y_range: axis.range,
        ticks: axis.ticks.clone(),
        category_labels: Vec::new(),
        web: None,
        series: Vec::new(),
        radial_labels: Vec::new(),
        value_labels: Vec::new(),
        no_data: None,
    };

    let (Some(data), Some(slice_angle)) = (frame.plotted_data(), frame.slice_angle) else {
        out.no_data = Some(no_data_layout(frame, measurer));
        return out;
    };

    out.category_labels = category_labels(frame, data);
    if frame.options.web.draw {
        out.web = Some(web_layout(frame, data, slice_angle));
    }
    out.series = data
        .data_sets()
        .iter()
        .enumerate()
        .filter(|(_, set)| set.is_visible())
        .map(|(i, set)| series_layout(frame, set, i, slice_angle))
        .collect();
    out.radial_labels = radial_labels(frame);
    out.value_labels = value_labels(frame, data, slice_angle);

    tracing::trace!(
        series = out.series.len(),
        rings = out.web.as_ref().map_or(0, |w| w.rings.len()),
        "radar frame laid out"
    );
    out
}

fn no_data_layout(frame: &RadarFrame<'_>, measurer: &dyn TextMeasurer) -> NoDataLayout {
    let font_size = frame.to_device_pixels(NO_DATA_TEXT_SIZE);
    let x = frame.viewport.chart_width / 2.0;
    let y = frame.viewport.chart_height / 2.0;
    let line = |text: &str, y: f64| TextLayout {
        text: text.to_string(),
        x,
        y,
        font_size,
        color: NO_DATA_TEXT_COLOR,
        align: TextAlign::Center,
    };

    let description = frame
        .options
        .no_data_description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| line(d, y + measurer.text_box_height(&TextStyle::sized(font_size))));
    NoDataLayout {
        text: line(&frame.options.no_data_text, y),
        description,
    }
}

fn category_labels(frame: &RadarFrame<'_>, data: &ChartData) -> Vec<TextLayout> {
    let axis = frame.category_axis;
    if !axis.is_enabled() || !axis.config().draw_labels {
        return Vec::new();
    }
    let font_size = frame.to_device_pixels(axis.config().text_size);
    let half_height = axis.label_height() / 2.0;
    data.categories()
        .iter()
        .zip(axis.label_positions())
        .map(|(text, p)| TextLayout {
            text: text.clone(),
            x: p.x,
            y: p.y + half_height,
            font_size,
            color: axis.config().text_color,
            align: TextAlign::Center,
        })
        .collect()
}

fn web_layout(frame: &RadarFrame<'_>, data: &ChartData, slice_angle: f64) -> WebLayout {
    let web = &frame.options.web;
    let center = frame.center();
    let rotation = frame.rotation;
    let n = data.category_count();
    let radius = frame.radius();

    let spokes = (0..n)
        .map(|i| {
            let p = geom::position(center, radius, slice_angle * i as f64 + rotation);
            LineLayout::between(center, p)
        })
        .collect();

    let y_min = frame.radial_axis.axis_minimum();
    let rings = frame
        .radial_axis
        .ticks()
        .values
        .iter()
        .map(|&value| {
            let r = (value - y_min) * frame.factor;
            let segments = (0..n)
                .map(|i| {
                    let p1 = geom::position(center, r, slice_angle * i as f64 + rotation);
                    let p2 = geom::position(center, r, slice_angle * (i + 1) as f64 + rotation);
                    LineLayout::between(p1, p2)
                })
                .collect();
            RingLayout {
                value,
                radius: r,
                segments,
            }
        })
        .collect();

    WebLayout {
        spoke_stroke: StrokeLayout {
            color: web.color.with_alpha(web.alpha),
            width: frame.to_device_pixels(web.line_width),
        },
        ring_stroke: StrokeLayout {
            color: web.inner_color.with_alpha(web.alpha),
            width: frame.to_device_pixels(web.inner_line_width),
        },
        spokes,
        rings,
    }
}

fn series_layout(
    frame: &RadarFrame<'_>,
    set: &DataSet,
    series_index: usize,
    slice_angle: f64,
) -> SeriesLayout {
    let (points, categories) = series_polygon(
        frame,
        set,
        frame.radial_axis.axis_minimum(),
        frame.factor,
        slice_angle,
    );
    let style = set.style();

    let fill = style
        .fill_enabled
        .then(|| set.fill_color(series_index).with_alpha(style.fill_alpha));
    // A fully opaque fill already shows the outline.
    let stroke = (!style.fill_enabled || style.fill_alpha < 255).then(|| StrokeLayout {
        color: set.color_at(0, series_index),
        width: frame.to_device_pixels(style.line_width),
    });

    SeriesLayout {
        label: set.label().to_string(),
        series_index,
        points: points.into_iter().map(LayoutPoint::from).collect(),
        categories,
        fill,
        stroke,
    }
}

fn radial_labels(frame: &RadarFrame<'_>) -> Vec<TextLayout> {
    let axis = frame.radial_axis;
    let cfg = axis.config();
    if !cfg.enabled || !cfg.draw_labels {
        return Vec::new();
    }

    let center = frame.center();
    let font_size = frame.to_device_pixels(cfg.text_size);
    let x_offset = frame.to_device_pixels(cfg.x_offset);
    let ticks = axis.ticks();
    let mut out = Vec::with_capacity(ticks.count);
    for (j, value) in ticks.values.iter().enumerate() {
        if j + 1 == ticks.count && !cfg.draw_top_label {
            break;
        }
        let r = (value - axis.axis_minimum()) * frame.factor;
        let p = geom::position(center, r, frame.rotation);
        out.push(TextLayout {
            text: axis.formatted_label(j).unwrap_or_default(),
            x: p.x + x_offset,
            y: p.y,
            font_size,
            color: cfg.text_color,
            align: TextAlign::Left,
        });
    }
    out
}

fn value_labels(frame: &RadarFrame<'_>, data: &ChartData, slice_angle: f64) -> Vec<TextLayout> {
    let font_size = frame.to_device_pixels(frame.options.values.text_size);
    let offset = frame.to_device_pixels(frame.options.values.offset);
    let y_min = frame.radial_axis.axis_minimum();

    let mut out = Vec::new();
    for set in data.data_sets() {
        let style = set.style();
        if !set.is_visible() || !style.draw_values {
            continue;
        }
        let formatter = style
            .value_decimals
            .map(ValueFormatter::new)
            .unwrap_or(frame.value_formatter);
        let (points, categories) = series_polygon(frame, set, y_min, frame.factor, slice_angle);
        for (p, category) in points.into_iter().zip(categories) {
            let Some(entry) = set.entry_for_category(category) else {
                continue;
            };
            out.push(TextLayout {
                text: formatter.format(entry.value),
                x: p.x,
                y: p.y - offset,
                font_size,
                color: style.value_text_color,
                align: TextAlign::Center,
            });
        }
    }
    out
}
