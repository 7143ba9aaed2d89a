use crate::model::{StrokeLayout, TextAlign};
use crate::text::TextStyle;
use arachne_core::Color;
use arachne_core::geom::Point;
use serde::{Deserialize, Serialize};

/// Where drawing output goes.
pub trait DrawSurface {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeLayout);

    /// Draws a closed polygon. Either paint may be absent.
    fn draw_path(&mut self, polygon: &[Point], fill: Option<Color>, stroke: Option<&StrokeLayout>);

    /// `at` is the text baseline anchor; `align` says which part of the text sits on it.
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle, color: Color, align: TextAlign);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        from: [f64; 2],
        to: [f64; 2],
        stroke: StrokeLayout,
    },
    Path {
        points: Vec<[f64; 2]>,
        fill: Option<Color>,
        stroke: Option<StrokeLayout>,
    },
    Text {
        text: String,
        at: [f64; 2],
        font_size: f64,
        color: Color,
        align: TextAlign,
    },
}

/// Keeps every call as a [`DrawCommand`], in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeLayout) {
        self.commands.push(DrawCommand::Line {
            from: [from.x, from.y],
            to: [to.x, to.y],
            stroke: *stroke,
        });
    }

    fn draw_path(&mut self, polygon: &[Point], fill: Option<Color>, stroke: Option<&StrokeLayout>) {
        self.commands.push(DrawCommand::Path {
            points: polygon.iter().map(|p| [p.x, p.y]).collect(),
            fill,
            stroke: stroke.copied(),
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at: [at.x, at.y],
            font_size: style.font_size,
            color,
            align,
        });
    }
}
