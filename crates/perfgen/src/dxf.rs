//! DXF export.
//!
//! Writes an ASCII DXF with the R12 (`AC1009`) section layout: a header
//! fixing the units to inches, a layer table with the fixed layer colours,
//! and `CIRCLE` / closed `POLYLINE` entities. R12 is the subset every CAD
//! package and laser/punch CAM importer still reads.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::atomic::write_atomic;
use crate::error::Error;
use crate::geometry::Point;
use crate::primitive::{Layer, Primitive};
use crate::sink::{draw_all, DrawingSink};

/// `$INSUNITS` value for inches.
const INSUNITS_INCHES: u8 = 1;

/// An in-memory DXF drawing.
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    layers: Vec<Layer>,
    entities: String,
    entity_count: usize,
}

impl DxfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document holding `primitives` on their layers.
    pub fn from_primitives(primitives: &[Primitive]) -> Self {
        let mut doc = Self::new();
        draw_all(&mut doc, primitives);
        doc
    }

    /// Number of entities written so far.
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Render the complete file.
    pub fn to_dxf_string(&self) -> String {
        let mut out = String::with_capacity(self.entities.len() + 1024);

        // HEADER
        pair(&mut out, 0, "SECTION");
        pair(&mut out, 2, "HEADER");
        pair(&mut out, 9, "$ACADVER");
        pair(&mut out, 1, "AC1009");
        pair(&mut out, 9, "$INSUNITS");
        pair(&mut out, 70, INSUNITS_INCHES);
        pair(&mut out, 9, "$MEASUREMENT");
        pair(&mut out, 70, 0);
        pair(&mut out, 0, "ENDSEC");

        // TABLES
        pair(&mut out, 0, "SECTION");
        pair(&mut out, 2, "TABLES");

        pair(&mut out, 0, "TABLE");
        pair(&mut out, 2, "LTYPE");
        pair(&mut out, 70, 1);
        pair(&mut out, 0, "LTYPE");
        pair(&mut out, 2, "CONTINUOUS");
        pair(&mut out, 70, 0);
        pair(&mut out, 3, "Solid line");
        pair(&mut out, 72, 65);
        pair(&mut out, 73, 0);
        pair(&mut out, 40, "0.0");
        pair(&mut out, 0, "ENDTAB");

        pair(&mut out, 0, "TABLE");
        pair(&mut out, 2, "LAYER");
        pair(&mut out, 70, self.layers.len());
        for layer in &self.layers {
            pair(&mut out, 0, "LAYER");
            pair(&mut out, 2, layer.name());
            pair(&mut out, 70, 0);
            pair(&mut out, 62, layer.aci_color());
            pair(&mut out, 6, "CONTINUOUS");
        }
        pair(&mut out, 0, "ENDTAB");
        pair(&mut out, 0, "ENDSEC");

        // ENTITIES
        pair(&mut out, 0, "SECTION");
        pair(&mut out, 2, "ENTITIES");
        out.push_str(&self.entities);
        pair(&mut out, 0, "ENDSEC");

        pair(&mut out, 0, "EOF");
        out
    }

    /// Write the file atomically: a failed write leaves no partial drawing.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        write_atomic(path, self.to_dxf_string())?;
        debug!(path = %path.display(), entities = self.entity_count, "dxf written");
        Ok(())
    }
}

impl DrawingSink for DxfDocument {
    fn ensure_layer(&mut self, layer: Layer) {
        if !self.layers.contains(&layer) {
            self.layers.push(layer);
        }
    }

    fn add_circle(&mut self, center: Point, radius: f64, layer: Layer) {
        self.ensure_layer(layer);
        let out = &mut self.entities;
        pair(out, 0, "CIRCLE");
        pair(out, 8, layer.name());
        coord(out, center);
        pair(out, 40, num(radius));
        self.entity_count += 1;
    }

    fn add_closed_polyline(&mut self, vertices: &[Point], layer: Layer) {
        if vertices.len() < 2 {
            return;
        }
        self.ensure_layer(layer);
        let out = &mut self.entities;
        pair(out, 0, "POLYLINE");
        pair(out, 8, layer.name());
        // 66 = vertices follow, 70 bit 1 = closed
        pair(out, 66, 1);
        pair(out, 70, 1);
        coord(out, Point::ORIGIN);
        for v in vertices {
            pair(out, 0, "VERTEX");
            pair(out, 8, layer.name());
            coord(out, *v);
        }
        pair(out, 0, "SEQEND");
        pair(out, 8, layer.name());
        self.entity_count += 1;
    }
}

/// One group code / value pair, written straight into `out`.
fn pair(out: &mut String, code: u16, value: impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{:>3}\n{}\n", code, value);
}

/// A 2D point as group codes 10/20/30.
fn coord(out: &mut String, p: Point) {
    pair(out, 10, num(p.x));
    pair(out, 20, num(p.y));
    pair(out, 30, "0.0");
}

/// Six decimals; `-0.000000` is normalised to `0.000000`.
fn num(v: f64) -> String {
    let s = format!("{:.6}", v);
    if s == "-0.000000" { "0.000000".to_string() } else { s }
}
