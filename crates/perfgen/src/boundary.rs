//! Outer outline and the usable inner region.

use tracing::debug;

use crate::error::ConfigError;
use crate::geometry::{rectangle, regular_polygon, Point};
use crate::params::{BoundaryShape, BoundarySpec};
use crate::primitive::{Layer, Primitive};

/// Vertices used when the inner disk is handed to the clipping oracle
/// (180 per quadrant).
pub const INNER_DISK_SEGMENTS: usize = 720;

/// Boundary shrunk by the edge offset. Holes are placed in, and clipped to,
/// this region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InnerRegion {
    Disk { radius: f64 },
    Rect { half_length: f64, half_width: f64 },
}

impl InnerRegion {
    /// Polygon handed to the clipping oracle.
    pub fn outline(&self) -> Vec<Point> {
        match *self {
            InnerRegion::Disk { radius } => regular_polygon(Point::ORIGIN, radius, INNER_DISK_SEGMENTS),
            InnerRegion::Rect { half_length, half_width } => {
                rectangle(Point::ORIGIN, 2.0 * half_length, 2.0 * half_width)
            }
        }
    }
}

/// Result of building the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    /// Outline of the full plate, on layer `OUTER`.
    pub outer: Primitive,
    pub inner: InnerRegion,
    /// Extent the lattice has to cover in x.
    pub extent_x: f64,
    /// Extent the lattice has to cover in y.
    pub extent_y: f64,
}

/// Build the outer outline and inner region for a boundary spec.
///
/// Fails before anything is drawn if the offset leaves no usable region.
pub fn build_boundary(spec: &BoundarySpec) -> Result<Boundary, ConfigError> {
    spec.validate()?;
    let offset = spec.edge_offset;

    let boundary = match spec.shape {
        BoundaryShape::Circle { diameter } => {
            let inner_radius = diameter / 2.0 - offset;
            Boundary {
                outer: Primitive::Circle {
                    center: Point::ORIGIN,
                    radius: diameter / 2.0,
                    layer: Layer::Outer,
                },
                inner: InnerRegion::Disk { radius: inner_radius },
                extent_x: 2.0 * inner_radius,
                extent_y: 2.0 * inner_radius,
            }
        }
        BoundaryShape::Rectangle { length, width } => {
            let inner_length = length - 2.0 * offset;
            let inner_width = width - 2.0 * offset;
            Boundary {
                outer: Primitive::ClosedPolyline {
                    vertices: rectangle(Point::ORIGIN, length, width),
                    layer: Layer::Outer,
                },
                inner: InnerRegion::Rect {
                    half_length: inner_length / 2.0,
                    half_width: inner_width / 2.0,
                },
                extent_x: inner_length,
                extent_y: inner_width,
            }
        }
    };

    debug!(
        inner = ?boundary.inner,
        extent_x = boundary.extent_x,
        extent_y = boundary.extent_y,
        "boundary built"
    );
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_boundary() {
        let b = build_boundary(&BoundarySpec::circle(25.875, 0.125)).unwrap();
        assert_eq!(b.inner, InnerRegion::Disk { radius: 12.8125 });
        assert_eq!(b.extent_x, 25.625);
        assert_eq!(b.extent_y, 25.625);
        match b.outer {
            Primitive::Circle { center, radius, layer } => {
                assert_eq!(center, Point::ORIGIN);
                assert_eq!(radius, 12.9375);
                assert_eq!(layer, Layer::Outer);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn rectangle_boundary() {
        let b = build_boundary(&BoundarySpec::rectangle(24.0, 18.0, 0.125)).unwrap();
        assert_eq!(b.inner, InnerRegion::Rect { half_length: 11.875, half_width: 8.875 });
        assert_eq!((b.extent_x, b.extent_y), (23.75, 17.75));
        match &b.outer {
            Primitive::ClosedPolyline { vertices, layer } => {
                assert_eq!(vertices.len(), 4);
                assert_eq!(vertices[0], Point::new(-12.0, -9.0));
                assert_eq!(vertices[2], Point::new(12.0, 9.0));
                assert_eq!(*layer, Layer::Outer);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn offset_too_large_fails() {
        let err = build_boundary(&BoundarySpec::circle(1.0, 0.5)).unwrap_err();
        assert_eq!(err, ConfigError::OffsetTooLarge { shape: "circle" });
    }

    #[test]
    fn disk_outline_is_fine() {
        let outline = InnerRegion::Disk { radius: 5.0 }.outline();
        assert_eq!(outline.len(), INNER_DISK_SEGMENTS);
    }
}
