//! Layout parameters.
//!
//! Two layers live here:
//! - the typed specs (`BoundarySpec`, `HoleSpec`) that the generator consumes,
//!   closed enums carrying their own payload;
//! - `Params`, the flat option set a form, a job file or the command line
//!   fills in. `Params::validate()` turns it into typed specs or a
//!   `ConfigError`, and the caller decides whether to re-prompt or abort.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::boundary::build_boundary;
use crate::error::{require_positive, ConfigError};
use crate::lattice::checked_size;

/// Outer boundary shape with its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum BoundaryShape {
    Circle { diameter: f64 },
    Rectangle { length: f64, width: f64 },
}

/// Outer boundary plus the edge offset that shrinks it to the usable region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundarySpec {
    pub shape: BoundaryShape,
    pub edge_offset: f64,
}

impl BoundarySpec {
    pub fn circle(diameter: f64, edge_offset: f64) -> Self {
        Self { shape: BoundaryShape::Circle { diameter }, edge_offset }
    }

    pub fn rectangle(length: f64, width: f64, edge_offset: f64) -> Self {
        Self { shape: BoundaryShape::Rectangle { length, width }, edge_offset }
    }

    /// Check dimensions and that the inner region keeps a positive extent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.edge_offset.is_finite() {
            return Err(ConfigError::NotFinite { field: "edge offset" });
        }
        if self.edge_offset < 0.0 {
            return Err(ConfigError::NegativeOffset(self.edge_offset));
        }

        match self.shape {
            BoundaryShape::Circle { diameter } => {
                require_positive("diameter", diameter)?;
                if diameter / 2.0 - self.edge_offset <= 0.0 {
                    return Err(ConfigError::OffsetTooLarge { shape: "circle" });
                }
            }
            BoundaryShape::Rectangle { length, width } => {
                require_positive("length", length)?;
                require_positive("width", width)?;
                if length - 2.0 * self.edge_offset <= 0.0 || width - 2.0 * self.edge_offset <= 0.0 {
                    return Err(ConfigError::OffsetTooLarge { shape: "rectangle" });
                }
            }
        }
        Ok(())
    }

    /// Area of the full outer plate.
    pub fn plate_area(&self) -> f64 {
        match self.shape {
            BoundaryShape::Circle { diameter } => PI * diameter * diameter / 4.0,
            BoundaryShape::Rectangle { length, width } => length * width,
        }
    }

    /// Lowercase shape name, used for suggested file names.
    pub fn shape_name(&self) -> &'static str {
        match self.shape {
            BoundaryShape::Circle { .. } => "circle",
            BoundaryShape::Rectangle { .. } => "rectangle",
        }
    }
}

/// Hole outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum HoleShape {
    Circle { diameter: f64 },
    Square { side: f64 },
}

impl HoleShape {
    /// The one size parameter (diameter or side).
    pub fn size(&self) -> f64 {
        match *self {
            HoleShape::Circle { diameter } => diameter,
            HoleShape::Square { side } => side,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HoleShape::Circle { .. } => "circle",
            HoleShape::Square { .. } => "square",
        }
    }
}

/// Lattice arrangement of hole centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Square grid, same step in x and y.
    Straight,
    /// Triangular (60°) grid, odd rows shifted by half a step.
    Staggered,
}

impl Pattern {
    pub fn all() -> &'static [Pattern] {
        &[Pattern::Straight, Pattern::Staggered]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Straight => "straight",
            Pattern::Staggered => "staggered",
        }
    }

    /// Parse a pattern name (case-insensitive). `hex` is accepted for staggered.
    pub fn from_name(name: &str) -> Option<Pattern> {
        match name.to_lowercase().as_str() {
            "straight" => Some(Pattern::Straight),
            "staggered" | "hex" => Some(Pattern::Staggered),
            _ => None,
        }
    }
}

/// Hole outline plus how the holes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoleSpec {
    pub shape: HoleShape,
    /// Center-to-center distance between neighbouring holes.
    pub spacing: f64,
    pub pattern: Pattern,
}

impl HoleSpec {
    pub fn circle(diameter: f64, spacing: f64, pattern: Pattern) -> Self {
        Self { shape: HoleShape::Circle { diameter }, spacing, pattern }
    }

    pub fn square(side: f64, spacing: f64, pattern: Pattern) -> Self {
        Self { shape: HoleShape::Square { side }, spacing, pattern }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("hole size", self.shape.size())?;
        require_positive("spacing", self.spacing)?;
        Ok(())
    }
}

/// Outer shape choice in the flat option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub fn from_name(name: &str) -> Option<ShapeKind> {
        match name.to_lowercase().as_str() {
            "circle" => Some(ShapeKind::Circle),
            "rectangle" | "rect" => Some(ShapeKind::Rectangle),
            _ => None,
        }
    }
}

/// Hole shape choice in the flat option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleKind {
    Circle,
    Square,
}

impl HoleKind {
    pub fn from_name(name: &str) -> Option<HoleKind> {
        match name.to_lowercase().as_str() {
            "circle" | "round" => Some(HoleKind::Circle),
            "square" => Some(HoleKind::Square),
            _ => None,
        }
    }
}

/// Every recognised option, with the defaults of the parameter form.
///
/// Only the dimensions of the selected outer shape are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    pub shape: ShapeKind,
    pub outer_diameter: f64,
    pub outer_length: f64,
    pub outer_width: f64,
    pub edge_offset: f64,
    pub hole_shape: HoleKind,
    pub hole_size: f64,
    pub spacing: f64,
    pub pattern: Pattern,
    pub include_clipped: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Rectangle,
            outer_diameter: 25.875,
            outer_length: 24.0,
            outer_width: 18.0,
            edge_offset: 0.125,
            hole_shape: HoleKind::Circle,
            hole_size: 1.0,
            spacing: 2.0,
            pattern: Pattern::Straight,
            include_clipped: false,
        }
    }
}

impl Params {
    /// Build and check the typed specs.
    ///
    /// Hole checks run first, then the boundary, so the first message a user
    /// sees matches the order of the form. Last comes the lattice size, which
    /// depends on both.
    pub fn validate(&self) -> Result<(BoundarySpec, HoleSpec), ConfigError> {
        let hole = match self.hole_shape {
            HoleKind::Circle => HoleSpec::circle(self.hole_size, self.spacing, self.pattern),
            HoleKind::Square => HoleSpec::square(self.hole_size, self.spacing, self.pattern),
        };
        hole.validate()?;

        let boundary = match self.shape {
            ShapeKind::Circle => BoundarySpec::circle(self.outer_diameter, self.edge_offset),
            ShapeKind::Rectangle => {
                BoundarySpec::rectangle(self.outer_length, self.outer_width, self.edge_offset)
            }
        };
        let built = build_boundary(&boundary)?;
        checked_size(built.extent_x, built.extent_y, hole.spacing, hole.pattern)?;

        Ok((boundary, hole))
    }

    /// File name the form suggests: `{shape}_{pattern}_{hole}.{ext}`.
    pub fn suggested_file_name(&self, extension: &str) -> String {
        let shape = match self.shape {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        };
        let hole = match self.hole_shape {
            HoleKind::Circle => "circle",
            HoleKind::Square => "square",
        };
        format!("{}_{}_{}.{}", shape, self.pattern.name(), hole, extension)
    }
}
