//! Standalone SVG output.

use crate::model::{RadarLayout, StrokeLayout, TextAlign};
use crate::surface::DrawSurface;
use crate::text::TextStyle;
use arachne_core::Color;
use arachne_core::format::fmt_number as fmt;
use arachne_core::geom::Point;
use std::fmt::Write as _;

const DEFAULT_FONT_FAMILY: &str = r#""trebuchet ms",verdana,arial,sans-serif"#;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgRenderOptions {
    /// `id` attribute of the root element.
    pub diagram_id: Option<String>,
    pub font_family: Option<String>,
    /// Page background; `None` leaves it transparent.
    pub background: Option<Color>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            font_family: None,
            background: Some(Color::WHITE),
        }
    }
}

/// A [`DrawSurface`] that writes SVG elements into a string.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    out: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64, options: &SvgRenderOptions) -> Self {
        let id = escape_xml(options.diagram_id.as_deref().unwrap_or("radar"));
        let font_family = options
            .font_family
            .as_deref()
            .unwrap_or(DEFAULT_FONT_FAMILY);

        let mut out = String::new();
        let _ = write!(
            &mut out,
            r#"<svg id="{id}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" role="graphics-document document" aria-roledescription="radar""#,
            w = fmt(width),
            h = fmt(height),
        );
        if let Some(bg) = options.background {
            let _ = write!(&mut out, r#" style="background-color: {};""#, bg.to_hex_rgb());
        }
        out.push('>');
        let _ = write!(
            &mut out,
            "<style>#{id}{{font-family:{};}}</style>",
            escape_xml(font_family)
        );
        out.push_str("<g>");
        Self { out }
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</g></svg>\n");
        self.out
    }

    fn push_stroke(&mut self, stroke: &StrokeLayout) {
        let _ = write!(
            &mut self.out,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_hex_rgb(),
            fmt(stroke.width)
        );
        if !stroke.color.is_opaque() {
            let _ = write!(
                &mut self.out,
                r#" stroke-opacity="{}""#,
                fmt(stroke.color.opacity())
            );
        }
    }
}

impl DrawSurface for SvgSurface {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeLayout) {
        let _ = write!(
            &mut self.out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            fmt(from.x),
            fmt(from.y),
            fmt(to.x),
            fmt(to.y)
        );
        self.push_stroke(stroke);
        self.out.push_str("/>");
    }

    fn draw_path(&mut self, polygon: &[Point], fill: Option<Color>, stroke: Option<&StrokeLayout>) {
        let mut points = String::new();
        for (i, p) in polygon.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            let _ = write!(&mut points, "{},{}", fmt(p.x), fmt(p.y));
        }
        let _ = write!(&mut self.out, r#"<polygon points="{points}""#);
        match fill {
            Some(c) => {
                let _ = write!(&mut self.out, r#" fill="{}""#, c.to_hex_rgb());
                if !c.is_opaque() {
                    let _ = write!(&mut self.out, r#" fill-opacity="{}""#, fmt(c.opacity()));
                }
            }
            None => self.out.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = stroke {
            self.push_stroke(stroke);
            self.out.push_str(r#" stroke-linejoin="round""#);
        }
        self.out.push_str("/>");
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle, color: Color, align: TextAlign) {
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let _ = write!(
            &mut self.out,
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}""#,
            fmt(at.x),
            fmt(at.y),
            fmt(style.font_size),
            color.to_hex_rgb()
        );
        if !color.is_opaque() {
            let _ = write!(&mut self.out, r#" fill-opacity="{}""#, fmt(color.opacity()));
        }
        if let Some(family) = &style.font_family {
            let _ = write!(&mut self.out, r#" font-family="{}""#, escape_xml(family));
        }
        let _ = write!(&mut self.out, ">{}</text>", escape_xml(text));
    }
}

/// Renders `layout` as a complete SVG document.
pub fn render_radar_svg(layout: &RadarLayout, options: &SvgRenderOptions) -> String {
    let mut surface = SvgSurface::new(layout.width, layout.height, options);
    crate::draw::draw_layout(layout, &mut surface);
    surface.finish()
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(esc);
        start = i + 1;
    }
    out.push_str(&text[start..]);
    out
}
