//! Replays a [`RadarLayout`] onto a [`DrawSurface`].
//!
//! Order: category labels, web, series, radial labels, value labels. Without data only the
//! placeholder is drawn.

use crate::model::{RadarLayout, TextLayout};
use crate::surface::DrawSurface;
use crate::text::TextStyle;
use arachne_core::geom;

pub fn draw_layout(layout: &RadarLayout, surface: &mut dyn DrawSurface) {
    if let Some(no_data) = &layout.no_data {
        draw_text(surface, &no_data.text);
        if let Some(description) = &no_data.description {
            draw_text(surface, description);
        }
        return;
    }

    for label in &layout.category_labels {
        draw_text(surface, label);
    }

    if let Some(web) = &layout.web {
        for ring in &web.rings {
            for s in &ring.segments {
                surface.draw_line(
                    geom::point(s.x1, s.y1),
                    geom::point(s.x2, s.y2),
                    &web.ring_stroke,
                );
            }
        }
        for s in &web.spokes {
            surface.draw_line(
                geom::point(s.x1, s.y1),
                geom::point(s.x2, s.y2),
                &web.spoke_stroke,
            );
        }
    }

    for series in &layout.series {
        if series.points.is_empty() {
            continue;
        }
        let polygon: Vec<_> = series.points.iter().map(|p| p.to_point()).collect();
        surface.draw_path(&polygon, series.fill, series.stroke.as_ref());
    }

    for label in layout.radial_labels.iter().chain(&layout.value_labels) {
        draw_text(surface, label);
    }
}

fn draw_text(surface: &mut dyn DrawSurface, t: &TextLayout) {
    surface.draw_text(
        &t.text,
        geom::point(t.x, t.y),
        &TextStyle::sized(t.font_size),
        t.color,
        t.align,
    );
}
