//! # perfgen
//!
//! Perforated plate layouts: a lattice of round or square holes, straight or
//! staggered, clipped to a circular or rectangular plate and exported as a
//! layered drawing.
//!
//! The pipeline is pure input → output:
//!
//! ```text
//! BoundarySpec ──► boundary ──► lattice ──► emit ──► Vec<Primitive> ──► DrawingSink
//!                 (outline,    (centers)   (full /                     (DXF, SVG)
//!                  inner)                   clipped)
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod atomic;
pub mod boundary;
pub mod clip;
pub mod dxf;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod lattice;
pub mod layout;
pub mod params;
pub mod primitive;
pub mod sink;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use atomic::write_atomic;
pub use boundary::{build_boundary, Boundary, InnerRegion};
pub use clip::{ClipOracle, GeoClipper, Intersection};
pub use dxf::DxfDocument;
pub use error::{ConfigError, Error};
pub use geometry::Point;
pub use layout::{generate, generate_with, LayoutStats};
pub use params::{BoundaryShape, BoundarySpec, HoleKind, HoleShape, HoleSpec, Params, Pattern, ShapeKind};
pub use primitive::{Layer, Primitive};
pub use sink::{draw_all, DrawingSink};
pub use svg::SvgPreview;
