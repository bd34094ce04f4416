//! Common utilities shared across CLI commands.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

use perfgen::{generate, write_atomic, DxfDocument, LayoutStats, Params, Primitive, SvgPreview};

pub const SHAPE_CHOICES: &str = "circle, rectangle";
pub const HOLE_CHOICES: &str = "circle, square";
pub const PATTERN_CHOICES: &str = "straight, staggered";

/// Output format for a generated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// AutoCAD R12 ASCII DXF
    Dxf,
    /// SVG preview
    Svg,
    /// Primitives and stats as JSON
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Dxf => "dxf",
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

/// Output options shared by every command that writes a layout.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Dxf)]
    pub format: OutputFormat,

    /// Output file (- for stdout). Default: {shape}_{pattern}_{hole}.{ext}
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self { format: OutputFormat::Dxf, output: None }
    }
}

/// Where a rendered layout ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn resolve(output: Option<&Path>, params: &Params, format: OutputFormat) -> Self {
        match output {
            Some(path) if path == Path::new("-") => Destination::Stdout,
            Some(path) => Destination::File(path.to_path_buf()),
            None => Destination::File(PathBuf::from(params.suggested_file_name(format.extension()))),
        }
    }
}

#[derive(Serialize)]
struct JsonLayout<'a> {
    params: &'a Params,
    stats: LayoutStats,
    primitives: &'a [Primitive],
}

/// Validate `params`, generate the layout and write it out.
pub fn render_layout(params: &Params, output: &OutputArgs) -> Result<Destination> {
    let (boundary, hole) = params.validate()?;
    info!(
        shape = boundary.shape_name(),
        hole = hole.shape.name(),
        pattern = hole.pattern.name(),
        clipped = params.include_clipped,
        "generating layout"
    );

    let primitives = generate(&boundary, &hole, params.include_clipped)?;
    let stats = LayoutStats::from_primitives(&primitives, &boundary);
    stats.log();

    let destination = Destination::resolve(output.output.as_deref(), params, output.format);
    match &destination {
        Destination::File(path) if output.format == OutputFormat::Dxf => {
            DxfDocument::from_primitives(&primitives)
                .save(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        Destination::File(path) => {
            let text = render_text(output.format, params, &primitives, stats)?;
            write_atomic(path, text).with_context(|| format!("failed to write {}", path.display()))?;
        }
        Destination::Stdout => {
            let text = render_text(output.format, params, &primitives, stats)?;
            io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    if let Destination::File(path) = &destination {
        info!(path = %path.display(), "wrote {}", output.format.extension());
    }
    Ok(destination)
}

/// The whole output file as text.
pub fn render_text(
    format: OutputFormat,
    params: &Params,
    primitives: &[Primitive],
    stats: LayoutStats,
) -> Result<String> {
    let text = match format {
        OutputFormat::Dxf => DxfDocument::from_primitives(primitives).to_dxf_string(),
        OutputFormat::Svg => SvgPreview::from_primitives(primitives).to_svg_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonLayout { params, stats, primitives })
                .context("failed to serialize layout")?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}
