//! Drawing primitives and the layers they land on.

use std::f64::consts::PI;

use serde::Serialize;

use crate::geometry::{bounding_box, signed_area_of_points, Point};

/// Named drawing layer with a fixed display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layer {
    #[serde(rename = "OUTER")]
    Outer,
    #[serde(rename = "HOLES")]
    Holes,
    #[serde(rename = "HOLES-CLIPPED")]
    HolesClipped,
}

impl Layer {
    pub fn all() -> &'static [Layer] {
        &[Layer::Outer, Layer::Holes, Layer::HolesClipped]
    }

    /// Layer name as it appears in the drawing file.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Outer => "OUTER",
            Layer::Holes => "HOLES",
            Layer::HolesClipped => "HOLES-CLIPPED",
        }
    }

    /// AutoCAD Color Index: 7 white/black, 3 green, 1 red.
    pub fn aci_color(&self) -> u8 {
        match self {
            Layer::Outer => 7,
            Layer::Holes => 3,
            Layer::HolesClipped => 1,
        }
    }

    /// Same colours for the SVG preview (ACI 7 renders black on paper).
    pub fn rgb_color(&self) -> &'static str {
        match self {
            Layer::Outer => "#000000",
            Layer::Holes => "#00a000",
            Layer::HolesClipped => "#d00000",
        }
    }
}

/// One output outline.
///
/// ## Rust Lesson #10: Enums (Sum Types)
///
/// Each variant carries exactly the data it needs. A sink matching on this
/// enum cannot forget a case: the compiler checks it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Circle { center: Point, radius: f64, layer: Layer },
    ClosedPolyline { vertices: Vec<Point>, layer: Layer },
}

impl Primitive {
    pub fn layer(&self) -> Layer {
        match self {
            Primitive::Circle { layer, .. } | Primitive::ClosedPolyline { layer, .. } => *layer,
        }
    }

    /// Enclosed area (absolute value for polylines).
    pub fn area(&self) -> f64 {
        match self {
            Primitive::Circle { radius, .. } => PI * radius * radius,
            Primitive::ClosedPolyline { vertices, .. } => signed_area_of_points(vertices).abs(),
        }
    }

    /// Bounding box as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Primitive::Circle { center, radius, .. } => Some((
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            )),
            Primitive::ClosedPolyline { vertices, .. } => bounding_box(vertices),
        }
    }
}

/// Union of the bounding boxes of all primitives.
pub fn bounds_of(primitives: &[Primitive]) -> Option<(f64, f64, f64, f64)> {
    primitives
        .iter()
        .filter_map(Primitive::bounding_box)
        .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::square;

    #[test]
    fn layer_colours_are_fixed() {
        let colours: Vec<u8> = Layer::all().iter().map(Layer::aci_color).collect();
        assert_eq!(colours, vec![7, 3, 1]);
        assert_eq!(Layer::HolesClipped.name(), "HOLES-CLIPPED");
    }

    #[test]
    fn circle_bbox_and_area() {
        let c = Primitive::Circle { center: Point::new(1.0, 1.0), radius: 0.5, layer: Layer::Holes };
        assert_eq!(c.bounding_box(), Some((0.5, 0.5, 1.5, 1.5)));
        assert!((c.area() - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn union_of_bounds() {
        let prims = vec![
            Primitive::Circle { center: Point::ORIGIN, radius: 1.0, layer: Layer::Outer },
            Primitive::ClosedPolyline { vertices: square(Point::new(3.0, 0.0), 2.0), layer: Layer::Holes },
        ];
        assert_eq!(bounds_of(&prims), Some((-1.0, -1.0, 4.0, 1.0)));
        assert_eq!(bounds_of(&[]), None);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let c = Primitive::Circle { center: Point::ORIGIN, radius: 2.0, layer: Layer::HolesClipped };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"circle","center":{"x":0.0,"y":0.0},"radius":2.0,"layer":"HOLES-CLIPPED"}"#
        );
    }
}
