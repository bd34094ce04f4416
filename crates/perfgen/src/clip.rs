//! Polygon clipping oracle.
//!
//! Hole outlines that cross the inner boundary are intersected with the
//! region through the `ClipOracle` trait. The default implementation hands
//! the work to the `geo` crate's boolean operations.

use geo::{BooleanOps, Coord, LineString, Polygon as GeoPolygon};

use crate::geometry::{signed_area_of_points, Point};

/// Pieces smaller than this (square inches) are numerical slivers.
const MIN_PIECE_AREA: f64 = 1e-12;

/// Result of intersecting two polygons.
///
/// ## Rust Lesson #10: Enums (Sum Types)
///
/// Three shapes of answer, each carrying its own data. A caller matching on
/// this has to decide what to do with every one of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    Empty,
    Single(Vec<Point>),
    Multiple(Vec<Vec<Point>>),
}

impl Intersection {
    /// Build from a list of rings, dropping degenerate ones.
    pub fn from_pieces(pieces: Vec<Vec<Point>>) -> Self {
        let mut pieces: Vec<Vec<Point>> = pieces
            .into_iter()
            .map(open_ring)
            .filter(|ring| ring.len() >= 3 && signed_area_of_points(ring).abs() > MIN_PIECE_AREA)
            .collect();

        match pieces.len() {
            0 => Intersection::Empty,
            1 => Intersection::Single(pieces.remove(0)),
            _ => Intersection::Multiple(pieces),
        }
    }

    /// Every piece, in oracle order.
    pub fn into_pieces(self) -> Vec<Vec<Point>> {
        match self {
            Intersection::Empty => Vec::new(),
            Intersection::Single(ring) => vec![ring],
            Intersection::Multiple(rings) => rings,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }
}

/// Polygon intersection capability.
pub trait ClipOracle {
    /// Intersect `subject` with `clip`. Both are simple polygons given as
    /// open vertex rings.
    fn intersect(&self, subject: &[Point], clip: &[Point]) -> Intersection;
}

/// `ClipOracle` backed by `geo::BooleanOps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoClipper;

impl ClipOracle for GeoClipper {
    fn intersect(&self, subject: &[Point], clip: &[Point]) -> Intersection {
        if subject.len() < 3 || clip.len() < 3 {
            return Intersection::Empty;
        }

        let result = to_geo(subject).intersection(&to_geo(clip));

        // Interior rings cannot appear when clipping a convex hole against a
        // convex region, so only exteriors are kept.
        let pieces = result
            .0
            .iter()
            .map(|poly| {
                poly.exterior()
                    .coords()
                    .map(|c| Point::new(c.x, c.y))
                    .collect::<Vec<_>>()
            })
            .collect();

        Intersection::from_pieces(pieces)
    }
}

fn to_geo(points: &[Point]) -> GeoPolygon<f64> {
    let ring: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    GeoPolygon::new(LineString::new(ring), Vec::new())
}

/// Drop the closing vertex if the ring repeats its first point.
fn open_ring(mut ring: Vec<Point>) -> Vec<Point> {
    if ring.len() >= 2 {
        let first = ring[0];
        let last = ring[ring.len() - 1];
        if (first.x - last.x).abs() < 1e-12 && (first.y - last.y).abs() < 1e-12 {
            ring.pop();
        }
    }
    ring
}
