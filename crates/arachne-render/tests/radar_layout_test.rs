use arachne_core::geom::{self, Point};
use arachne_core::{ChartData, ChartDefinition, DataSet, DataSetStyle, Entry};
use arachne_render::model::TextAlign;
use arachne_render::surface::DrawCommand;
use arachne_render::{PolarChartHost, RadarChart, RecordingSurface, chart_from_definition};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn fixture_chart(name: &str) -> RadarChart {
    let path = workspace_root().join("fixtures").join("radar").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    let def = ChartDefinition::from_json_str(&text).unwrap();
    chart_from_definition(def, &[]).unwrap()
}

fn angle_of(center: Point, p: [f64; 2]) -> f64 {
    geom::angle_for_point(center, geom::point(p[0], p[1]))
}

fn assert_angle(actual: f64, expected: f64) {
    let diff = (actual - expected).rem_euclid(360.0);
    assert!(diff < 1e-6 || 360.0 - diff < 1e-6, "{actual} != {expected}");
}

#[test]
fn three_categories_place_points_at_rotation_offsets() {
    let chart = fixture_chart("basic.json");
    assert_eq!(chart.slice_angle(), Some(120.0));
    assert_eq!(chart.rotation_angle(), 270.0);

    let layout = chart.layout();
    let center = layout.center.to_point();
    let series = &layout.series[0];
    assert_eq!(series.points.len(), 3);
    assert_eq!(series.categories, vec![0, 1, 2]);
    for (p, expected) in series.points.iter().zip([270.0, 30.0, 150.0]) {
        assert_angle(angle_of(center, [p.x, p.y]), expected);
    }

    // auto-scaled: starts at zero, 10% headroom over 200
    assert_eq!(layout.y_min, 0.0);
    assert_eq!(layout.y_max, 220.0);
    let outer = geom::distance(center, series.points[2].to_point());
    assert!((outer - 200.0 * layout.factor).abs() < 1e-9);
}

#[test]
fn rotation_moves_every_category_by_the_delta() {
    let mut chart = fixture_chart("basic.json");
    let before = chart.layout();
    chart.set_rotation(270.0 + 45.0 + 720.0);
    let after = chart.layout();
    assert_eq!(chart.raw_rotation_angle(), 1035.0);

    let c = after.center.to_point();
    for (p0, p1) in before.series[0].points.iter().zip(&after.series[0].points) {
        let a0 = angle_of(c, [p0.x, p0.y]);
        let a1 = angle_of(c, [p1.x, p1.y]);
        assert_angle(a1, a0 + 45.0);
        let r0 = geom::distance(c, p0.to_point());
        let r1 = geom::distance(c, p1.to_point());
        assert!((r0 - r1).abs() < 1e-9);
    }

    // back to the start: no drift
    chart.set_rotation(270.0);
    assert_eq!(chart.layout(), before);
}

#[test]
fn nan_points_are_skipped_without_breaking_the_polygon() {
    let chart = fixture_chart("two_series.json");
    let layout = chart.layout();
    let this_week = &layout.series[0];
    assert_eq!(this_week.points.len(), 5);
    assert_eq!(this_week.categories, vec![0, 1, 2, 3, 4]);
    assert_eq!(layout.series[1].points.len(), 6);

    // only the first series draws values, minus its NaN
    assert_eq!(layout.value_labels.len(), 5);
}

#[test]
fn web_rings_follow_ticks_and_spokes_follow_categories() {
    let chart = fixture_chart("two_series.json");
    let layout = chart.layout();
    let web = layout.web.as_ref().unwrap();
    assert_eq!(web.spokes.len(), 6);
    assert_eq!(web.rings.len(), layout.ticks.count);
    for ring in &web.rings {
        assert_eq!(ring.segments.len(), 6);
        assert!(ring.radius <= layout.radius + 1e-9);
    }
    assert_eq!(web.ring_stroke.color.a, 200);
    assert_eq!(web.spoke_stroke.width, 1.5);
    assert_eq!(web.ring_stroke.width, 0.75);
}

#[test]
fn fill_and_stroke_policy() {
    let labels: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let style = |fill: bool, alpha: u8| DataSetStyle {
        fill_enabled: fill,
        fill_alpha: alpha,
        ..DataSetStyle::default()
    };
    let sets = vec![
        DataSet::from_values("outline", [1.0, 2.0, 3.0]).with_style(style(false, 255)),
        DataSet::from_values("translucent", [1.0, 2.0, 3.0]).with_style(style(true, 85)),
        DataSet::from_values("opaque", [1.0, 2.0, 3.0]).with_style(style(true, 255)),
    ];
    let mut chart = RadarChart::default();
    chart.set_data(ChartData::new(labels, sets).unwrap());
    let layout = chart.layout();

    assert!(layout.series[0].fill.is_none() && layout.series[0].stroke.is_some());
    assert!(layout.series[1].fill.is_some() && layout.series[1].stroke.is_some());
    assert_eq!(layout.series[1].fill.map(|c| c.a), Some(85));
    assert!(layout.series[2].fill.is_some() && layout.series[2].stroke.is_none());
}

#[test]
fn radial_labels_sit_on_the_rotation_spoke() {
    let mut chart = fixture_chart("basic.json");
    let layout = chart.layout();
    assert_eq!(layout.radial_labels.len(), layout.ticks.count);
    let first = &layout.radial_labels[0];
    assert_eq!(first.align, TextAlign::Left);
    assert_eq!(first.x, layout.center.x + 10.0);
    assert_eq!(first.text, "0");

    chart.update_radial_axis(|cfg| cfg.draw_top_label = false);
    assert_eq!(chart.layout().radial_labels.len(), layout.ticks.count - 1);
}

#[test]
fn draw_order_and_placeholder() {
    let chart = fixture_chart("basic.json");
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface);

    let kinds: Vec<&str> = surface
        .commands
        .iter()
        .map(|c| match c {
            DrawCommand::Line { .. } => "line",
            DrawCommand::Path { .. } => "path",
            DrawCommand::Text { .. } => "text",
        })
        .collect();
    let first_line = kinds.iter().position(|k| *k == "line").unwrap();
    let path = kinds.iter().position(|k| *k == "path").unwrap();
    assert!(kinds[..first_line].iter().all(|k| *k == "text"));
    assert!(first_line < path);
    assert!(kinds[path + 1..].iter().all(|k| *k == "text"));
    assert_eq!(surface.texts().take(3).collect::<Vec<_>>(), ["Speed", "Power", "Range"]);

    let empty = fixture_chart("empty.json");
    let mut surface = RecordingSurface::new();
    let layout = empty.draw(&mut surface);
    assert!(!layout.has_data());
    assert_eq!(
        surface.texts().collect::<Vec<_>>(),
        ["No chart data available.", "Load a data file to begin."]
    );
}

#[test]
fn explicit_entries_plot_by_index() {
    let labels: Vec<String> = ["n", "e", "s", "w"].iter().map(|s| s.to_string()).collect();
    let set = DataSet::new(
        "shuffled",
        vec![
            Entry::new(4.0, 3),
            Entry::new(1.0, 0),
            Entry::new(3.0, 2),
            Entry::new(2.0, 1),
        ],
    );
    let mut chart = RadarChart::default();
    chart.set_data(ChartData::new(labels, vec![set]).unwrap());
    let layout = chart.layout();
    let c = chart.center();
    let angles: Vec<f64> = layout.series[0]
        .points
        .iter()
        .map(|p| angle_of(c, [p.x, p.y]))
        .collect();
    for (a, expected) in angles.iter().zip([270.0, 0.0, 90.0, 180.0]) {
        assert_angle(*a, expected);
    }
}
