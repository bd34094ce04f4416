//! `perfgen generate`: a layout from command-line options.
//!
//! Options given on the command line win over the job file named by
//! `--config`, which wins over the built-in defaults.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use perfgen::{HoleKind, Params, Pattern, ShapeKind};

use super::common::{render_layout, OutputArgs, HOLE_CHOICES, PATTERN_CHOICES, SHAPE_CHOICES};
use super::job::load_job;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// YAML job file providing values for options not given here
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Outer shape: circle or rectangle
    #[arg(long, value_parser = shape_arg)]
    pub shape: Option<ShapeKind>,

    /// Outer diameter (circle)
    #[arg(long, allow_negative_numbers = true)]
    pub diameter: Option<f64>,

    /// Outer length along x (rectangle)
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<f64>,

    /// Outer width along y (rectangle)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Margin between the plate edge and the holes
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<f64>,

    /// Hole shape: circle or square
    #[arg(long, value_parser = hole_arg)]
    pub hole_shape: Option<HoleKind>,

    /// Hole diameter or square side
    #[arg(long, allow_negative_numbers = true)]
    pub hole_size: Option<f64>,

    /// Center-to-center hole spacing
    #[arg(long, allow_negative_numbers = true)]
    pub spacing: Option<f64>,

    /// Lattice: straight or staggered
    #[arg(long, value_parser = pattern_arg)]
    pub pattern: Option<Pattern>,

    /// Also draw the parts of holes cut by the edge (HOLES-CLIPPED layer)
    #[arg(long, conflicts_with = "no_include_clipped")]
    pub include_clipped: bool,

    /// Leave clipped holes out even if the job file asks for them
    #[arg(long)]
    pub no_include_clipped: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl GenerateArgs {
    /// Overlay the options that were given onto `params`.
    pub fn apply(&self, params: &mut Params) {
        if let Some(shape) = self.shape {
            params.shape = shape;
        }
        if let Some(diameter) = self.diameter {
            params.outer_diameter = diameter;
        }
        if let Some(length) = self.length {
            params.outer_length = length;
        }
        if let Some(width) = self.width {
            params.outer_width = width;
        }
        if let Some(offset) = self.offset {
            params.edge_offset = offset;
        }
        if let Some(hole_shape) = self.hole_shape {
            params.hole_shape = hole_shape;
        }
        if let Some(size) = self.hole_size {
            params.hole_size = size;
        }
        if let Some(spacing) = self.spacing {
            params.spacing = spacing;
        }
        if let Some(pattern) = self.pattern {
            params.pattern = pattern;
        }
        if self.include_clipped {
            params.include_clipped = true;
        } else if self.no_include_clipped {
            params.include_clipped = false;
        }
    }
}

pub fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let mut params = match &args.config {
        Some(path) => load_job(path)?,
        None => Params::default(),
    };
    args.apply(&mut params);
    render_layout(&params, &args.output)?;
    Ok(())
}

fn shape_arg(s: &str) -> Result<ShapeKind, String> {
    ShapeKind::from_name(s).ok_or_else(|| format!("expected one of: {}", SHAPE_CHOICES))
}

fn hole_arg(s: &str) -> Result<HoleKind, String> {
    HoleKind::from_name(s).ok_or_else(|| format!("expected one of: {}", HOLE_CHOICES))
}

fn pattern_arg(s: &str) -> Result<Pattern, String> {
    Pattern::from_name(s).ok_or_else(|| format!("expected one of: {}", PATTERN_CHOICES))
}
