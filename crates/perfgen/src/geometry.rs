//! Core geometry types for perfgen.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy = implicitly, small stack values only)
//! - `PartialEq` = compare with `==`
//! - `Serialize` = serde can turn it into JSON/YAML

use std::f64::consts::PI;

use serde::Serialize;

/// A 2D point with x,y coordinates (drawing units are inches).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, where every layout is centered.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the origin.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Translate by (dx, dy).
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Vertices of a regular polygon inscribed in a circle, counter-clockwise,
/// starting at angle 0.
///
/// This is how circles are handed to the clipping oracle. `segments` below 3
/// is clamped to 3.
pub fn regular_polygon(center: Point, radius: f64, segments: usize) -> Vec<Point> {
    let n = segments.max(3);
    (0..n)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n as f64;
            Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
        })
        .collect()
}

/// Axis-aligned rectangle centered on `center`, counter-clockwise from the
/// lower-left corner.
pub fn rectangle(center: Point, length: f64, width: f64) -> Vec<Point> {
    let hx = length / 2.0;
    let hy = width / 2.0;
    vec![
        center.offset(-hx, -hy),
        center.offset(hx, -hy),
        center.offset(hx, hy),
        center.offset(-hx, hy),
    ]
}

/// Axis-aligned square centered on `center`.
#[inline]
pub fn square(center: Point, side: f64) -> Vec<Point> {
    rectangle(center, side, side)
}

/// Calculate signed area of a point sequence using the shoelace formula.
///
/// Returns:
/// - Positive value for counter-clockwise winding
/// - Negative value for clockwise winding
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

/// Get the bounding box of a point sequence as (min_x, min_y, max_x, max_y).
///
/// ## Rust Lesson #6: Option<T>
///
/// Rust has no `null`. An empty slice has no bounding box, so we
/// return `None` and the caller MUST deal with it.
pub fn bounding_box(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}
