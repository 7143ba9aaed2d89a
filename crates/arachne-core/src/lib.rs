#![forbid(unsafe_code)]

//! Radar chart core (headless).
//!
//! Polar geometry, "nice" tick generation, value formatting and the immutable data model shared
//! by layout and rendering. Nothing here draws; see `arachne-render` for that.

pub mod color;
pub mod config;
pub mod data;
pub mod definition;
pub mod error;
pub mod format;
pub mod geom;
pub mod ticks;
pub mod units;

pub use color::Color;
pub use config::ChartConfig;
pub use data::{AxisDependency, ChartData, DataSet, DataSetStyle, Entry};
pub use definition::ChartDefinition;
pub use error::{Error, Result};
pub use format::ValueFormatter;
pub use ticks::{AxisTicks, compute_ticks};
pub use units::Density;
