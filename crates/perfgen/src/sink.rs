//! Drawing sinks: anything that accepts layered primitives.

use crate::geometry::Point;
use crate::primitive::{Layer, Primitive};

/// Receiver for drawing primitives.
///
/// ## Rust Lesson #17: Traits
///
/// A trait is an interface. The generator never knows whether it is
/// feeding a DXF file or an SVG preview; each writer implements these
/// three methods and gets `draw_all` for free.
pub trait DrawingSink {
    /// Declare a layer. Declaring the same layer twice is a no-op.
    fn ensure_layer(&mut self, layer: Layer);

    fn add_circle(&mut self, center: Point, radius: f64, layer: Layer);

    fn add_closed_polyline(&mut self, vertices: &[Point], layer: Layer);
}

/// Declare every layer, then replay `primitives` in order.
pub fn draw_all<S: DrawingSink + ?Sized>(sink: &mut S, primitives: &[Primitive]) {
    for layer in Layer::all() {
        sink.ensure_layer(*layer);
    }

    for primitive in primitives {
        match primitive {
            Primitive::Circle { center, radius, layer } => sink.add_circle(*center, *radius, *layer),
            Primitive::ClosedPolyline { vertices, layer } => sink.add_closed_polyline(vertices, *layer),
        }
    }
}
