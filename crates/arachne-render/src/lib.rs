#![forbid(unsafe_code)]

//! Radar chart layout and drawing (headless).
//!
//! [`RadarChart`] owns the state and sequences recomputation; [`layout::layout_radar`] turns a
//! frame snapshot into device-pixel primitives that any [`surface::DrawSurface`] can replay.

pub mod axis;
pub mod chart;
pub mod draw;
pub mod host;
pub mod layout;
pub mod model;
pub mod options;
pub mod surface;
pub mod svg;
pub mod text;
pub mod viewport;

pub use axis::{CategoryAxis, RadialAxis};
pub use chart::RadarChart;
pub use host::{PolarChartHost, RadarFrame};
pub use model::RadarLayout;
pub use options::{CategoryAxisConfig, ChartOptions, RadialAxisConfig, WebStyle};
pub use surface::{DrawSurface, RecordingSurface};
pub use viewport::{Insets, Viewport};

use arachne_core::{ChartConfig, ChartDefinition};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] arachne_core::Error),
    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Builds a chart from a parsed definition, with `overrides` applied over its config.
pub fn chart_from_definition(definition: ChartDefinition, overrides: &[String]) -> Result<RadarChart> {
    let ChartDefinition { data, mut config } = definition;
    apply_overrides(&mut config, overrides)?;
    let options = ChartOptions::from_config(&config)?;
    let mut chart = RadarChart::new(options);
    chart.set_data(data);
    Ok(chart)
}

fn apply_overrides(config: &mut ChartConfig, overrides: &[String]) -> Result<()> {
    for assignment in overrides {
        config.apply_override(assignment)?;
    }
    Ok(())
}
