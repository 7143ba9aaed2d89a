use crate::viewport::Insets;
use arachne_core::geom::{Point, Rect};
use arachne_core::{AxisTicks, Color};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for LayoutPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl LayoutPoint {
    pub fn to_point(self) -> Point {
        arachne_core::geom::point(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for LayoutRect {
    fn from(r: Rect) -> Self {
        Self {
            x: r.origin.x,
            y: r.origin.y,
            width: r.size.width,
            height: r.size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineLayout {
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeLayout {
    /// Stroke color with its opacity folded into the alpha channel.
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayout {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: Color,
    pub align: TextAlign,
}

/// One concentric ring: a segment between every pair of adjacent category angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingLayout {
    pub value: f64,
    pub radius: f64,
    pub segments: Vec<LineLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebLayout {
    pub spoke_stroke: StrokeLayout,
    pub ring_stroke: StrokeLayout,
    pub spokes: Vec<LineLayout>,
    pub rings: Vec<RingLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLayout {
    pub label: String,
    pub series_index: usize,
    /// Polygon vertices in category order; points with non-finite coordinates are left out.
    pub points: Vec<LayoutPoint>,
    /// Category index of every vertex in `points`.
    pub categories: Vec<usize>,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoDataLayout {
    pub text: TextLayout,
    #[serde(default)]
    pub description: Option<TextLayout>,
}

/// A fully resolved radar chart frame in device pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLayout {
    pub width: f64,
    pub height: f64,
    pub offsets: Insets,
    pub content: LayoutRect,
    pub center: LayoutPoint,
    pub radius: f64,
    pub factor: f64,
    pub rotation: f64,
    #[serde(default)]
    pub slice_angle: Option<f64>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_range: f64,
    pub ticks: AxisTicks,
    #[serde(default)]
    pub category_labels: Vec<TextLayout>,
    #[serde(default)]
    pub web: Option<WebLayout>,
    #[serde(default)]
    pub series: Vec<SeriesLayout>,
    #[serde(default)]
    pub radial_labels: Vec<TextLayout>,
    #[serde(default)]
    pub value_labels: Vec<TextLayout>,
    #[serde(default)]
    pub no_data: Option<NoDataLayout>,
}

impl RadarLayout {
    pub fn has_data(&self) -> bool {
        self.no_data.is_none()
    }

    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }
}
