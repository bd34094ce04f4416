//! Hole-center lattices.
//!
//! Both lattices are centered on the origin. Each axis gets one point more
//! than the extent strictly needs, so holes whose centers sit just outside
//! the region are still considered for clipping.

use tracing::debug;

use crate::error::ConfigError;
use crate::geometry::Point;
use crate::params::Pattern;

/// Most lattice positions one layout may have. A 48 x 96 sheet at 1/16"
/// spacing needs about 1.2 million.
pub const MAX_LATTICE_POINTS: usize = 10_000_000;

/// Hole centers covering `extent_x` by `extent_y`, row by row from the
/// bottom.
///
/// `spacing` must be positive; callers validate it first.
pub fn lattice_centers(extent_x: f64, extent_y: f64, spacing: f64, pattern: Pattern) -> Vec<Point> {
    let centers = match pattern {
        Pattern::Straight => straight_centers(extent_x, extent_y, spacing),
        Pattern::Staggered => staggered_centers(extent_x, extent_y, spacing),
    };
    debug!(pattern = pattern.name(), count = centers.len(), "lattice built");
    centers
}

/// Number of lattice positions, checked against `MAX_LATTICE_POINTS`.
///
/// Runs before any center is generated, so a spacing that is valid but far
/// too small for the plate is reported instead of exhausting memory.
pub fn checked_size(extent_x: f64, extent_y: f64, spacing: f64, pattern: Pattern) -> Result<usize, ConfigError> {
    let count = dimensions(extent_x, extent_y, spacing, pattern).and_then(|(nx, ny)| nx.checked_mul(ny));
    match count {
        Some(count) if count <= MAX_LATTICE_POINTS => Ok(count),
        _ => Err(ConfigError::TooManyHoles { limit: MAX_LATTICE_POINTS }),
    }
}

/// Columns and rows, or `None` when a count does not fit in `usize`.
fn dimensions(extent_x: f64, extent_y: f64, spacing: f64, pattern: Pattern) -> Option<(usize, usize)> {
    match pattern {
        Pattern::Straight => Some((
            axis_count(extent_x, spacing)?.checked_add(1)?,
            axis_count(extent_y, spacing)?.checked_add(1)?,
        )),
        Pattern::Staggered => Some((
            axis_count(extent_x, spacing)?.checked_add(2)?,
            axis_count(extent_y, row_pitch(spacing))?.checked_add(1)?,
        )),
    }
}

/// Square grid with `spacing` in both axes.
///
/// Empty when the size cannot be represented; size it with `checked_size`
/// first.
pub fn straight_centers(extent_x: f64, extent_y: f64, spacing: f64) -> Vec<Point> {
    let Some((nx, ny)) = dimensions(extent_x, extent_y, spacing, Pattern::Straight) else {
        return Vec::new();
    };
    let x0 = start(nx, spacing);
    let y0 = start(ny, spacing);

    let mut centers = Vec::with_capacity(nx.saturating_mul(ny));
    for j in 0..ny {
        let y = y0 + j as f64 * spacing;
        for i in 0..nx {
            centers.push(Point::new(x0 + i as f64 * spacing, y));
        }
    }
    centers
}

/// Triangular grid: rows `spacing·√3/2` apart, odd rows shifted right by
/// half a step. One extra column covers the shift.
pub fn staggered_centers(extent_x: f64, extent_y: f64, spacing: f64) -> Vec<Point> {
    let Some((nx, ny)) = dimensions(extent_x, extent_y, spacing, Pattern::Staggered) else {
        return Vec::new();
    };
    let row_pitch = row_pitch(spacing);
    let x0 = start(nx, spacing);
    let y0 = start(ny, row_pitch);

    let mut centers = Vec::with_capacity(nx.saturating_mul(ny));
    for j in 0..ny {
        let y = y0 + j as f64 * row_pitch;
        let shift = if j % 2 == 1 { spacing / 2.0 } else { 0.0 };
        for i in 0..nx {
            centers.push(Point::new(x0 + i as f64 * spacing + shift, y));
        }
    }
    centers
}

/// Vertical distance between staggered rows.
#[inline]
pub fn row_pitch(spacing: f64) -> f64 {
    spacing * 3.0_f64.sqrt() / 2.0
}

/// Steps needed to span `extent`.
#[inline]
fn axis_count(extent: f64, step: f64) -> Option<usize> {
    let steps = (extent / step).ceil().max(0.0);
    // usize::MAX as f64 rounds up, so `<` keeps the cast in range
    if steps.is_finite() && steps < usize::MAX as f64 { Some(steps as usize) } else { None }
}

/// First coordinate of `n` points `step` apart, centered on zero.
#[inline]
fn start(n: usize, step: f64) -> f64 {
    -((n - 1) as f64 * step) / 2.0
}
