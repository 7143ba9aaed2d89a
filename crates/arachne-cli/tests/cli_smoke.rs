use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("radar").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn cli() -> Command {
    Command::new(assert_cmd::cargo_bin!("arachne-cli"))
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

#[test]
fn cli_renders_png_smoke() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("out.png");

    cli()
        .args([
            "render",
            "--format",
            "png",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture("basic.json").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );

    let decoder = png::Decoder::new(fs::File::open(&out).expect("open png"));
    let reader = decoder.read_info().expect("png header");
    let info = reader.info();
    assert_eq!((info.width, info.height), (400, 400));
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let tmp_fixture = tmp.path().join("two_series.json");
    fs::copy(fixture("two_series.json"), &tmp_fixture).expect("copy fixture");

    cli()
        .args([
            "render",
            "--format",
            "png",
            "--scale",
            "2",
            tmp_fixture.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let expected_out = tmp_fixture.with_extension("png");
    let decoder = png::Decoder::new(fs::File::open(&expected_out).expect("open png"));
    let reader = decoder.read_info().expect("png header");
    assert_eq!((reader.info().width, reader.info().height), (960, 720));
}

#[test]
fn cli_renders_svg_to_stdout() {
    let output = cli()
        .args(["render", "--set", "web.draw=false"])
        .arg(fixture("basic.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let svg = String::from_utf8(output).expect("utf-8 svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polygon"));
    assert!(!svg.contains("<line"));
}

#[test]
fn cli_layout_reads_stdin() {
    let text = fs::read_to_string(fixture("basic.json")).expect("read fixture");
    let output = cli()
        .args(["layout", "-"])
        .write_stdin(text)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let layout: serde_json::Value = serde_json::from_slice(&output).expect("layout JSON");
    assert_eq!(layout["slice_angle"], serde_json::json!(120.0));
    assert_eq!(layout["series"].as_array().map(Vec::len), Some(1));
}

#[test]
fn cli_select_resolves_categories() {
    // straight up from the center of a 400x400 chart rotated to 270
    let hit = stdout_json(
        cli()
            .args(["select", "--x", "200", "--y", "150"])
            .arg(fixture("basic.json")),
    );
    assert_eq!(hit, serde_json::json!({ "index": 0, "label": "Speed" }));

    let miss = stdout_json(
        cli()
            .args(["select", "--x", "1", "--y", "1"])
            .arg(fixture("basic.json")),
    );
    assert!(miss.is_null());
}

#[test]
fn cli_ticks_prints_axis_ticks() {
    let ticks = stdout_json(cli().args(["ticks", "--min", "0", "--max", "100", "--count", "6"]));
    assert_eq!(ticks["interval"], serde_json::json!(20.0));
    assert_eq!(ticks["count"], serde_json::json!(6));

    let only = stdout_json(cli().args(["ticks", "--min", "3", "--max", "9", "--only-min-max"]));
    assert_eq!(only["values"], serde_json::json!([3.0, 9.0]));
}

#[test]
fn cli_ticks_bounds_huge_counts() {
    let ticks = stdout_json(cli().args([
        "ticks",
        "--min",
        "0",
        "--max",
        "1",
        "--count",
        "1000000000000",
    ]));
    let count = ticks["count"].as_u64().expect("tick count");
    assert!(count > 0 && count <= 51, "unexpected tick count {count}");
    assert_eq!(ticks["values"].as_array().map(Vec::len), Some(count as usize));
}

#[test]
fn cli_usage_errors_exit_with_2() {
    cli().assert().code(2);
    cli().args(["select", "--x", "10"]).assert().code(2);
    cli().args(["render", "--format", "gif"]).assert().code(2);
}

#[test]
fn cli_bad_input_exits_with_1() {
    cli()
        .args(["layout", "-"])
        .write_stdin("{ not json")
        .assert()
        .code(1);
}
