//! SVG preview export.
//!
//! Not a CAD format; it exists so a layout can be eyeballed in a browser
//! before the DXF goes to the shop. Y is flipped so the preview reads like
//! the CAD view (Y up).

use crate::geometry::Point;
use crate::primitive::{bounds_of, Layer, Primitive};
use crate::sink::{draw_all, DrawingSink};

/// Margin around the drawing, in inches.
const MARGIN: f64 = 0.25;

/// Stroke width in drawing units (inches).
const STROKE_WIDTH: f64 = 0.02;

/// SVG document under construction, one group per layer.
#[derive(Debug, Clone, Default)]
pub struct SvgPreview {
    // One body per layer, in declaration order.
    groups: Vec<(Layer, String)>,
    bounds: Option<(f64, f64, f64, f64)>,
}

impl SvgPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_primitives(primitives: &[Primitive]) -> Self {
        let mut svg = Self::new();
        svg.bounds = bounds_of(primitives);
        draw_all(&mut svg, primitives);
        svg
    }

    fn group(&mut self, layer: Layer) -> &mut String {
        let idx = match self.groups.iter().position(|(l, _)| *l == layer) {
            Some(idx) => idx,
            None => {
                self.groups.push((layer, String::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }

    /// Render the document.
    pub fn to_svg_string(&self) -> String {
        let (min_x, min_y, max_x, max_y) = self.bounds.unwrap_or((-1.0, -1.0, 1.0, 1.0));
        let x = min_x - MARGIN;
        // Flipped: SVG top edge is the drawing's max y.
        let y = -max_y - MARGIN;
        let w = (max_x - min_x) + 2.0 * MARGIN;
        let h = (max_y - min_y) + 2.0 * MARGIN;

        let mut svg = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w:.4}in" height="{h:.4}in" viewBox="{x:.4} {y:.4} {w:.4} {h:.4}">
"#
        );

        for (layer, body) in &self.groups {
            svg.push_str(&format!(
                "<g id=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\">\n",
                layer.name(),
                layer.rgb_color(),
                STROKE_WIDTH
            ));
            svg.push_str(body);
            svg.push_str("</g>\n");
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawingSink for SvgPreview {
    fn ensure_layer(&mut self, layer: Layer) {
        self.group(layer);
    }

    fn add_circle(&mut self, center: Point, radius: f64, layer: Layer) {
        let line = format!(
            "  <circle cx=\"{:.4}\" cy=\"{:.4}\" r=\"{:.4}\"/>\n",
            center.x, -center.y, radius
        );
        self.group(layer).push_str(&line);
    }

    fn add_closed_polyline(&mut self, vertices: &[Point], layer: Layer) {
        if vertices.len() < 2 {
            return;
        }
        // Build points string: "x1,y1 x2,y2 x3,y3 ..."
        let points: String = vertices
            .iter()
            .map(|p| format!("{:.4},{:.4}", p.x, -p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let line = format!("  <polygon points=\"{}\"/>\n", points);
        self.group(layer).push_str(&line);
    }
}
