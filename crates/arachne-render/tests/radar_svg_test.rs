use arachne_core::ChartDefinition;
use arachne_render::chart_from_definition;
use arachne_render::svg::{SvgRenderOptions, render_radar_svg};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn render_fixture(name: &str, overrides: &[String]) -> String {
    let path = workspace_root().join("fixtures").join("radar").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    let def = ChartDefinition::from_json_str(&text).unwrap();
    let chart = chart_from_definition(def, overrides).unwrap();
    render_radar_svg(&chart.layout(), &SvgRenderOptions::default())
}

#[test]
fn svg_document_has_web_series_and_labels() {
    let svg = render_fixture("basic.json", &[]);
    assert!(svg.starts_with(r#"<svg id="radar" width="400" height="400""#));
    assert!(svg.contains(r#"viewBox="0 0 400 400""#));
    assert_eq!(svg.matches("<polygon").count(), 1);
    // 3 spokes + 6 rings of 3 segments
    assert_eq!(svg.matches("<line").count(), 3 + 6 * 3);
    assert!(svg.contains(">Speed</text>"));
    assert!(svg.contains(r##"fill="#c1ff8c""##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn overrides_reach_the_output() {
    let svg = render_fixture(
        "basic.json",
        &["web.draw=false".to_string(), "width=640".to_string()],
    );
    assert_eq!(svg.matches("<line").count(), 0);
    assert!(svg.contains(r#"width="640""#));
}

#[test]
fn empty_chart_renders_placeholder_only() {
    let svg = render_fixture("empty.json", &[]);
    assert!(svg.contains(">No chart data available.</text>"));
    assert!(!svg.contains("<polygon"));
    assert!(!svg.contains("<line"));
}
