//! Job files: a YAML document holding one parameter set.
//!
//! Every key is optional; missing keys take the defaults of the parameter
//! form. Unknown keys are an error so a typo never silently falls back to a
//! default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use perfgen::Params;

use super::common::{render_layout, OutputArgs};

pub const EXAMPLE_JOB: &str = r##"# Example perfgen job
# Dimensions are in inches.

shape: circle            # circle | rectangle
outer_diameter: 25.875   # used when shape is circle
outer_length: 24.0       # used when shape is rectangle
outer_width: 18.0
edge_offset: 0.125       # margin kept free of holes

hole_shape: square       # circle | square
hole_size: 1.0           # diameter or side
spacing: 2.0             # center to center
pattern: straight        # straight | staggered

include_clipped: false   # also draw holes cut by the edge
"##;

#[derive(Args, Debug)]
pub struct JobArgs {
    /// YAML job file
    #[arg(required_unless_present = "example")]
    pub file: Option<PathBuf>,

    /// Print an example job file and exit
    #[arg(long, conflicts_with = "file")]
    pub example: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Load a job file.
pub fn load_job(path: &Path) -> Result<Params> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read job file {}", path.display()))?;
    let params = parse_job(&content).with_context(|| format!("invalid job file {}", path.display()))?;
    debug!(path = %path.display(), ?params, "job loaded");
    Ok(params)
}

/// Parse job YAML. An empty document is the default job.
pub fn parse_job(content: &str) -> Result<Params> {
    if content.trim().is_empty() {
        return Ok(Params::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub fn cmd_job(args: &JobArgs) -> Result<()> {
    if args.example {
        print!("{}", EXAMPLE_JOB);
        return Ok(());
    }

    let path = args.file.as_deref().context("no job file given")?;
    let params = load_job(path)?;
    render_layout(&params, &args.output)?;
    Ok(())
}
