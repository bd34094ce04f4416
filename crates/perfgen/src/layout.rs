//! The generation pipeline: boundary, lattice, holes.

use serde::Serialize;
use tracing::{debug, info};

use crate::boundary::build_boundary;
use crate::clip::{ClipOracle, GeoClipper};
use crate::emit::emit_holes;
use crate::error::ConfigError;
use crate::lattice::{checked_size, lattice_centers};
use crate::params::{BoundarySpec, HoleSpec};
use crate::primitive::{Layer, Primitive};

/// Generate the full drawing for one plate.
///
/// The outer outline comes first, then the holes in lattice order. Identical
/// inputs always give identical output.
pub fn generate(
    boundary: &BoundarySpec,
    hole: &HoleSpec,
    include_clipped: bool,
) -> Result<Vec<Primitive>, ConfigError> {
    generate_with(&GeoClipper, boundary, hole, include_clipped)
}

/// `generate` with an explicit clipping oracle.
pub fn generate_with(
    oracle: &dyn ClipOracle,
    boundary: &BoundarySpec,
    hole: &HoleSpec,
    include_clipped: bool,
) -> Result<Vec<Primitive>, ConfigError> {
    // Everything is checked up front; no primitive exists until both pass.
    hole.validate()?;
    let built = build_boundary(boundary)?;
    checked_size(built.extent_x, built.extent_y, hole.spacing, hole.pattern)?;

    let centers = lattice_centers(built.extent_x, built.extent_y, hole.spacing, hole.pattern);
    debug!(candidates = centers.len(), "placing holes");

    let holes = emit_holes(&centers, hole, &built.inner, include_clipped, oracle);

    let mut primitives = Vec::with_capacity(holes.len() + 1);
    primitives.push(built.outer);
    primitives.extend(holes);
    Ok(primitives)
}

/// Summary of a generated layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutStats {
    /// Holes drawn whole on `HOLES`.
    pub full_holes: usize,
    /// Fragments on `HOLES-CLIPPED`.
    pub clipped_fragments: usize,
    /// Total area removed from the plate.
    pub open_area: f64,
    /// Area of the outer plate.
    pub plate_area: f64,
    /// `open_area / plate_area`.
    pub open_ratio: f64,
}

impl LayoutStats {
    pub fn from_primitives(primitives: &[Primitive], boundary: &BoundarySpec) -> Self {
        let mut full_holes = 0;
        let mut clipped_fragments = 0;
        let mut open_area = 0.0;

        for primitive in primitives {
            match primitive.layer() {
                Layer::Outer => continue,
                Layer::Holes => full_holes += 1,
                Layer::HolesClipped => clipped_fragments += 1,
            }
            open_area += primitive.area();
        }

        let plate_area = boundary.plate_area();
        let open_ratio = if plate_area > 0.0 { open_area / plate_area } else { 0.0 };

        Self { full_holes, clipped_fragments, open_area, plate_area, open_ratio }
    }

    /// Log the summary at info level.
    pub fn log(&self) {
        info!(
            full = self.full_holes,
            clipped = self.clipped_fragments,
            "open area {:.3} of {:.3} sq in ({:.1}%)",
            self.open_area,
            self.plate_area,
            self.open_ratio * 100.0
        );
    }
}
