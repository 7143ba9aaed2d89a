#![forbid(unsafe_code)]

use arachne::render::raster::{RasterError, RasterOptions};
use arachne::render::{HeadlessError, HeadlessRenderer, chart_from_json};
use arachne::compute_ticks;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Headless(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Headless(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "raster error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Headless(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Layout,
    Render,
    Select,
    Ticks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderFormat {
    Svg,
    Png,
}

impl std::str::FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    overrides: Vec<String>,
    format: RenderFormat,
    scale: f32,
    out: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    count: usize,
    only_min_max: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Layout,
            input: None,
            pretty: false,
            overrides: Vec::new(),
            format: RenderFormat::Svg,
            scale: 1.0,
            out: None,
            x: None,
            y: None,
            min: None,
            max: None,
            count: 6,
            only_min_max: false,
        }
    }
}

fn usage() -> &'static str {
    "arachne-cli\n\
\n\
USAGE:\n\
  arachne-cli layout [--pretty] [--set key=value]... [<path>|-]\n\
  arachne-cli render [--format svg|png] [--scale <n>] [--out <path>] [--set key=value]... [<path>|-]\n\
  arachne-cli select --x <px> --y <px> [--set key=value]... [<path>|-]\n\
  arachne-cli ticks --min <v> --max <v> [--count <n>] [--only-min-max]\n\
\n\
NOTES:\n\
  - Input is a JSON chart definition read from <path>, or stdin when omitted or '-'.\n\
  - `--set` overrides one config key, e.g. `--set radialAxis.labelCount=4`.\n\
  - `render --format png` writes next to the input (or ./out.png) unless `--out` is given.\n\
  - Set ARACHNE_LOG (e.g. `debug`) to see diagnostics on stderr.\n"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_num<T: std::str::FromStr>(raw: &str) -> Result<T, CliError> {
    raw.parse::<T>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut it = argv.iter().skip(1);

    let Some(cmd) = it.next() else {
        return Err(CliError::Usage(usage()));
    };
    args.command = match cmd.as_str() {
        "layout" => Command::Layout,
        "render" => Command::Render,
        "select" => Command::Select,
        "ticks" => Command::Ticks,
        _ => return Err(CliError::Usage(usage())),
    };

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--pretty" => args.pretty = true,
            "--only-min-max" => args.only_min_max = true,
            "--set" => {
                let assignment = next_value(&mut it)?;
                if !assignment.contains('=') {
                    return Err(CliError::Usage(usage()));
                }
                args.overrides.push(assignment.clone());
            }
            "--format" => {
                args.format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => args.scale = parse_num(next_value(&mut it)?)?,
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--x" => args.x = Some(parse_num(next_value(&mut it)?)?),
            "--y" => args.y = Some(parse_num(next_value(&mut it)?)?),
            "--min" => args.min = Some(parse_num(next_value(&mut it)?)?),
            "--max" => args.max = Some(parse_num(next_value(&mut it)?)?),
            "--count" => args.count = parse_num(next_value(&mut it)?)?,
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    match args.command {
        Command::Select if args.x.is_none() || args.y.is_none() => {
            return Err(CliError::Usage(usage()));
        }
        Command::Ticks if args.min.is_none() || args.max.is_none() => {
            return Err(CliError::Usage(usage()));
        }
        _ => {}
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> PathBuf {
    match input {
        Some(path) if path != "-" => PathBuf::from(path).with_extension(ext),
        _ => PathBuf::from(format!("out.{ext}")),
    }
}

#[derive(Debug, Serialize)]
struct Selection {
    index: usize,
    label: String,
}

fn run(args: Args) -> Result<(), CliError> {
    if args.command == Command::Ticks {
        let (Some(min), Some(max)) = (args.min, args.max) else {
            return Err(CliError::Usage(usage()));
        };
        let ticks = compute_ticks(min, max, args.count, args.only_min_max);
        return write_json(&ticks, args.pretty);
    }

    let text = read_input(args.input.as_deref())?;

    match args.command {
        Command::Layout => write_json(&chart_from_json(&text, &args.overrides)?.layout(), args.pretty),
        Command::Render => {
            let renderer = HeadlessRenderer {
                overrides: args.overrides.clone(),
                ..HeadlessRenderer::default()
            };
            match args.format {
                RenderFormat::Svg => write_text(&renderer.render_svg(&text)?, args.out.as_deref()),
                RenderFormat::Png => {
                    let raster = RasterOptions {
                        scale: args.scale,
                        ..RasterOptions::default()
                    };
                    let png = renderer.render_png(&text, &raster)?;
                    let out = args
                        .out
                        .map(PathBuf::from)
                        .unwrap_or_else(|| default_raster_out_path(args.input.as_deref(), "png"));
                    std::fs::write(&out, png)?;
                    tracing::info!(path = %out.display(), "wrote PNG");
                    Ok(())
                }
            }
        }
        Command::Select => {
            let (Some(x), Some(y)) = (args.x, args.y) else {
                return Err(CliError::Usage(usage()));
            };
            let chart = chart_from_json(&text, &args.overrides)?;
            let selection = chart.select_at(x, y).map(|index| Selection {
                index,
                label: chart.category_label_at(index).unwrap_or_default().to_string(),
            });
            write_json(&selection, args.pretty)
        }
        Command::Ticks => Ok(()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ARACHNE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
