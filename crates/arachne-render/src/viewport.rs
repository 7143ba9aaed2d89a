//! Border negotiation: how much of the chart area axis labels reserve before content is placed.

use arachne_core::geom::{self, Point, Rect};
use serde::{Deserialize, Serialize};

/// Four border widths, in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            left: self.left * factor,
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
        }
    }

    /// Negative or non-finite sides become 0.
    fn sanitized(self) -> Self {
        let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            left: clean(self.left),
            top: clean(self.top),
            right: clean(self.right),
            bottom: clean(self.bottom),
        }
    }
}

impl std::ops::Add for Insets {
    type Output = Insets;

    fn add(self, rhs: Insets) -> Insets {
        Insets {
            left: self.left + rhs.left,
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

/// Chart area, reserved offsets and the content rectangle left over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub chart_width: f64,
    pub chart_height: f64,
    pub offsets: Insets,
    pub content: Rect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::restrained(0.0, 0.0, Insets::default())
    }
}

impl Viewport {
    /// Content rectangle for a `width` x `height` area minus `offsets`; never negative in size.
    pub fn restrained(width: f64, height: f64, offsets: Insets) -> Self {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        let offsets = offsets.sanitized();
        let content = geom::rect(
            offsets.left,
            offsets.top,
            (width - offsets.left - offsets.right).max(0.0),
            (height - offsets.top - offsets.bottom).max(0.0),
        );
        Self {
            chart_width: width,
            chart_height: height,
            offsets,
            content,
        }
    }

    pub fn center(&self) -> Point {
        self.content.center()
    }

    /// Half of the shorter content side.
    pub fn radius(&self) -> f64 {
        self.content.size.width.min(self.content.size.height) / 2.0
    }
}

/// Inputs to [`negotiate`], all in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRequest {
    pub width: f64,
    pub height: f64,
    pub min_offset: f64,
    pub category_axis_enabled: bool,
    pub category_label_width: f64,
    pub extra: Insets,
}

/// Reserves offsets for the chart described by `req`.
///
/// Every side gets at least `min_offset`. With the category axis enabled the minimum grows to the
/// label width, because radially arranged labels are limited by width, not height. The bottom side
/// additionally honors that label width as its base offset.
pub fn negotiate(req: &OffsetRequest) -> Viewport {
    let mut min = req.min_offset.max(0.0);
    if req.category_axis_enabled {
        min = min.max(req.category_label_width);
    }
    let base = if req.category_axis_enabled {
        req.category_label_width
    } else {
        req.min_offset
    };
    let bottom = min.max(base);

    let offsets = Insets {
        left: min,
        top: min,
        right: min,
        bottom,
    } + req.extra.sanitized();

    let viewport = Viewport::restrained(req.width, req.height, offsets);
    tracing::debug!(
        left = viewport.offsets.left,
        top = viewport.offsets.top,
        right = viewport.offsets.right,
        bottom = viewport.offsets.bottom,
        content_width = viewport.content.size.width,
        content_height = viewport.content.size.height,
        "offsets negotiated"
    );
    viewport
}
