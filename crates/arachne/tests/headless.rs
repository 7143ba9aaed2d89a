use arachne::render::{
    HeadlessError, HeadlessRenderer, layout_definition, render_svg, sanitize_svg_id,
};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn fixture_text(name: &str) -> String {
    let path = workspace_root().join("fixtures").join("radar").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

#[test]
fn layout_snapshot_serializes_to_json() {
    let layout = layout_definition(&fixture_text("basic.json"), &[]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&layout.to_json(false).unwrap()).unwrap();
    assert_eq!(json["slice_angle"], 120.0);
    assert_eq!(json["series"][0]["label"], "Set 1");
    assert_eq!(json["series"][0]["fill"], "#c1ff8c55");
    assert_eq!(json["category_labels"].as_array().map(Vec::len), Some(3));
}

#[test]
fn overrides_apply_before_layout() {
    let layout = layout_definition(
        &fixture_text("basic.json"),
        &["radialAxis.max=400".to_string(), "rotation=0".to_string()],
    )
    .unwrap();
    assert_eq!(layout.y_max, 400.0);
    assert_eq!(layout.rotation, 0.0);
}

#[test]
fn invalid_definitions_surface_as_errors() {
    let err = layout_definition(r#"{"categories": ["a"], "series": [{"values": [1, 2]}]}"#, &[])
        .unwrap_err();
    assert!(matches!(err, HeadlessError::Definition(_)));

    let err = layout_definition(&fixture_text("basic.json"), &["nonsense".to_string()]).unwrap_err();
    assert!(matches!(err, HeadlessError::Render(_)));
}

#[test]
fn renderer_sets_sanitized_ids() {
    let svg = HeadlessRenderer::new()
        .with_diagram_id("  my chart #1 ")
        .render_svg(&fixture_text("basic.json"))
        .unwrap();
    assert!(svg.starts_with(r#"<svg id="my-chart-1""#));

    let plain = render_svg(&fixture_text("basic.json"), &[], &Default::default()).unwrap();
    assert!(plain.starts_with(r#"<svg id="radar""#));
}

#[test]
fn svg_ids_are_conservative() {
    assert_eq!(sanitize_svg_id("abc"), "abc");
    assert_eq!(sanitize_svg_id("1st"), "r-1st");
    assert_eq!(sanitize_svg_id("  "), "radar");
    assert_eq!(sanitize_svg_id("a//b"), "a-b");
}

#[cfg(feature = "raster")]
#[test]
fn renderer_rasterizes_to_png() {
    use arachne::render::raster::RasterOptions;

    let png = HeadlessRenderer::new()
        .with_override("web.draw=false")
        .render_png(&fixture_text("basic.json"), &RasterOptions::default())
        .unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));

    let err = HeadlessRenderer::new()
        .render_png("{ not json", &RasterOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        arachne::render::raster::RasterError::Headless(HeadlessError::Definition(_))
    ));
}
