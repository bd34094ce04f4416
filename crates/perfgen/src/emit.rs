//! Hole emission: decide per center whether the hole fits, needs clipping,
//! or is dropped, and produce the primitives.
//!
//! The closed-form tests below settle most holes without touching the
//! clipping oracle. Only holes that straddle the inner boundary are clipped.

use std::f64::consts::SQRT_2;

use tracing::{debug, trace};

use crate::boundary::InnerRegion;
use crate::clip::ClipOracle;
use crate::geometry::{regular_polygon, square, Point};
use crate::params::{HoleShape, HoleSpec};
use crate::primitive::{Layer, Primitive};

/// Vertices of the polygon standing in for a circular hole when it is
/// clipped (96 per quadrant).
pub const HOLE_SEGMENTS: usize = 384;

/// Slack for the closed-form tests, so a hole touching the boundary exactly
/// still counts as inside.
const EPS: f64 = 1e-9;

/// Where a hole sits relative to the inner region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Entirely inside; drawn as is.
    Full,
    /// Crosses the boundary; needs the oracle.
    Partial,
    /// No overlap with positive area.
    Outside,
}

/// Classify the hole at `center`.
pub fn classify(center: Point, shape: &HoleShape, inner: &InnerRegion) -> Containment {
    let (x, y) = (center.x.abs(), center.y.abs());

    match (*shape, *inner) {
        (HoleShape::Circle { diameter }, InnerRegion::Rect { half_length, half_width }) => {
            let r = diameter / 2.0;
            if x <= half_length - r + EPS && y <= half_width - r + EPS {
                Containment::Full
            } else if distance_to_rect(x, y, half_length, half_width) >= r {
                Containment::Outside
            } else {
                Containment::Partial
            }
        }
        (HoleShape::Circle { diameter }, InnerRegion::Disk { radius }) => {
            let r = diameter / 2.0;
            let d = center.norm();
            if d <= radius - r + EPS {
                Containment::Full
            } else if d >= radius + r {
                Containment::Outside
            } else {
                Containment::Partial
            }
        }
        (HoleShape::Square { side }, InnerRegion::Rect { half_length, half_width }) => {
            let h = side / 2.0;
            if x <= half_length - h + EPS && y <= half_width - h + EPS {
                Containment::Full
            } else if x - h >= half_length || y - h >= half_width {
                Containment::Outside
            } else {
                Containment::Partial
            }
        }
        (HoleShape::Square { side }, InnerRegion::Disk { radius }) => {
            let circumradius = side * SQRT_2 / 2.0;
            let h = side / 2.0;
            if center.norm() <= radius - circumradius + EPS {
                Containment::Full
            } else if distance_to_rect(x, y, h, h) >= radius {
                // Nearest point of the square to the origin is outside the disk.
                Containment::Outside
            } else {
                Containment::Partial
            }
        }
    }
}

/// Distance from (x, y) to the centered rectangle, zero inside.
/// Works on absolute coordinates, so it also gives the distance from the
/// origin to a rectangle centered on (x, y) with the same half extents.
#[inline]
fn distance_to_rect(x: f64, y: f64, half_x: f64, half_y: f64) -> f64 {
    let dx = (x - half_x).max(0.0);
    let dy = (y - half_y).max(0.0);
    dx.hypot(dy)
}

/// Native outline of a hole (circle primitive or 4-vertex square).
fn native_primitive(center: Point, shape: &HoleShape, layer: Layer) -> Primitive {
    match *shape {
        HoleShape::Circle { diameter } => Primitive::Circle { center, radius: diameter / 2.0, layer },
        HoleShape::Square { side } => Primitive::ClosedPolyline { vertices: square(center, side), layer },
    }
}

/// Polygon handed to the oracle for a straddling hole.
fn clip_outline(center: Point, shape: &HoleShape) -> Vec<Point> {
    match *shape {
        HoleShape::Circle { diameter } => regular_polygon(center, diameter / 2.0, HOLE_SEGMENTS),
        HoleShape::Square { side } => square(center, side),
    }
}

/// Emit primitives for every center, in center order.
///
/// Fully contained holes go to `HOLES`. Straddling holes are clipped onto
/// `HOLES-CLIPPED` when `include_clipped` is set and dropped otherwise.
pub fn emit_holes(
    centers: &[Point],
    hole: &HoleSpec,
    inner: &InnerRegion,
    include_clipped: bool,
    oracle: &dyn ClipOracle,
) -> Vec<Primitive> {
    let region = if include_clipped { inner.outline() } else { Vec::new() };

    let mut primitives = Vec::new();
    let mut full = 0usize;
    let mut fragments = 0usize;
    let mut dropped = 0usize;

    for &center in centers {
        match classify(center, &hole.shape, inner) {
            Containment::Full => {
                primitives.push(native_primitive(center, &hole.shape, Layer::Holes));
                full += 1;
            }
            Containment::Partial if include_clipped => {
                let pieces = oracle.intersect(&clip_outline(center, &hole.shape), &region).into_pieces();
                if pieces.is_empty() {
                    trace!(x = center.x, y = center.y, "clip came back empty");
                    dropped += 1;
                }
                for vertices in pieces {
                    primitives.push(Primitive::ClosedPolyline { vertices, layer: Layer::HolesClipped });
                    fragments += 1;
                }
            }
            Containment::Partial | Containment::Outside => {
                dropped += 1;
            }
        }
    }

    debug!(full, fragments, dropped, "holes emitted");
    primitives
}
