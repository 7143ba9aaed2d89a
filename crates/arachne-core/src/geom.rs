//! Polar-coordinate kernel shared by layout, drawing and hit-testing.
//!
//! Angles are in degrees and follow screen coordinates (y grows downwards): 0° points east,
//! 90° south, 180° west and 270° north. [`position`] and [`angle_for_point`] are inverses of
//! each other in that frame.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    euclid::rect(x, y, width, height)
}

/// Point at `distance` from `center` in direction `angle_degrees`.
///
/// A zero distance returns `center` exactly, whatever the angle.
pub fn position(center: Point, distance: f64, angle_degrees: f64) -> Point {
    if distance == 0.0 {
        return center;
    }
    let theta = angle_degrees.to_radians();
    center + vector(distance * theta.cos(), distance * theta.sin())
}

/// Maps any finite angle into `[0, 360)`.
///
/// Equivalent to repeatedly adding 360 while negative and then taking the remainder, but done in a
/// single pass so very negative inputs cost the same as normalized ones.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // `rem_euclid` rounds tiny negative inputs up to exactly 360.
    if a >= 360.0 { 0.0 } else { a }
}

/// Angle of `p` around `center`, in the same frame as [`position`], within `[0, 360)`.
///
/// Returns NaN when `p` coincides with `center` (there is no direction to report).
pub fn angle_for_point(center: Point, p: Point) -> f64 {
    let tx = p.x - center.x;
    let ty = p.y - center.y;
    let length = (tx * tx + ty * ty).sqrt();
    if length == 0.0 {
        return f64::NAN;
    }

    let mut angle = (ty / length).clamp(-1.0, 1.0).acos().to_degrees();
    if p.x > center.x {
        angle = 360.0 - angle;
    }

    // acos measures from south; shift so 0° lands on east like `position`.
    normalize_angle(angle + 90.0)
}

pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
