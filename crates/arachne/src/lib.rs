#![forbid(unsafe_code)]

//! `arachne` draws radar ("spider-web") charts without a UI toolkit.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`arachne::render`)
//! - `raster`: enable PNG output via pure-Rust SVG rasterization

pub use arachne_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use arachne_render::model::RadarLayout;
    pub use arachne_render::surface::{DrawCommand, DrawSurface, RecordingSurface};
    pub use arachne_render::svg::{SvgRenderOptions, SvgSurface, render_radar_svg};
    pub use arachne_render::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};
    pub use arachne_render::{
        ChartOptions, Insets, PolarChartHost, RadarChart, chart_from_definition,
    };

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Definition(#[from] arachne_core::Error),
        #[error(transparent)]
        Render(#[from] arachne_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Turns an arbitrary string into an SVG `id` token: unsupported characters become `-` and
    /// the result always starts with an ASCII letter.
    pub fn sanitize_svg_id(raw: &str) -> String {
        let mapped: String = raw
            .trim()
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.') {
                    ch
                } else {
                    '-'
                }
            })
            .collect();
        let mut collapsed = String::with_capacity(mapped.len());
        for ch in mapped.chars() {
            if ch == '-' && collapsed.ends_with('-') {
                continue;
            }
            collapsed.push(ch);
        }
        let trimmed = collapsed.trim_matches('-');
        if trimmed.is_empty() {
            return "radar".to_string();
        }
        if trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
            trimmed.to_string()
        } else {
            format!("r-{trimmed}")
        }
    }

    /// Parses a JSON chart definition and builds a chart with `overrides` (`path=value`) applied.
    pub fn chart_from_json(text: &str, overrides: &[String]) -> Result<RadarChart> {
        let definition = arachne_core::ChartDefinition::from_json_str(text)?;
        Ok(chart_from_definition(definition, overrides)?)
    }

    pub fn layout_definition(text: &str, overrides: &[String]) -> Result<RadarLayout> {
        Ok(chart_from_json(text, overrides)?.layout())
    }

    pub fn render_svg(text: &str, overrides: &[String], svg: &SvgRenderOptions) -> Result<String> {
        let layout = layout_definition(text, overrides)?;
        Ok(render_radar_svg(&layout, svg))
    }

    /// Bundles overrides and SVG options for repeated headless renders.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub overrides: Vec<String>,
        pub svg: SvgRenderOptions,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_override(mut self, assignment: impl Into<String>) -> Self {
            self.overrides.push(assignment.into());
            self
        }

        pub fn with_diagram_id(mut self, id: &str) -> Self {
            self.svg.diagram_id = Some(sanitize_svg_id(id));
            self
        }

        pub fn layout(&self, text: &str) -> Result<RadarLayout> {
            layout_definition(text, &self.overrides)
        }

        pub fn render_svg(&self, text: &str) -> Result<String> {
            render_svg(text, &self.overrides, &self.svg)
        }

        #[cfg(feature = "raster")]
        pub fn render_png(&self, text: &str, raster: &raster::RasterOptions) -> raster::Result<Vec<u8>> {
            raster::render_png(text, &self.overrides, &self.svg, raster)
        }
    }
}
