//! `perfgen prompt`: the parameter form on a terminal.
//!
//! Each question shows the current value in brackets; an empty answer keeps
//! it. Text that does not parse is asked again on the spot. When the whole
//! set fails validation the message is shown and the form starts over with
//! the answers given so far as the new defaults.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Args;
use thiserror::Error;
use tracing::debug;

use perfgen::{HoleKind, Params, Pattern, ShapeKind};

use super::common::{render_layout, Destination, OutputArgs, HOLE_CHOICES, PATTERN_CHOICES, SHAPE_CHOICES};

/// An answer that could not be read as the requested kind of value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{input}' is not one of: {choices}")]
    UnknownChoice { input: String, choices: &'static str },

    #[error("answer yes or no (got '{0}')")]
    NotYesNo(String),
}

#[derive(Args, Debug)]
pub struct PromptArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Question/answer loop over any line source.
pub struct Form<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for every option until the set validates.
    pub fn fill(&mut self, mut params: Params) -> Result<Params> {
        loop {
            params.shape = self.ask("Outer shape (circle/rectangle)", shape_label(params.shape), parse_shape)?;
            match params.shape {
                ShapeKind::Circle => {
                    params.outer_diameter = self.ask("Outer diameter", params.outer_diameter, parse_number)?;
                }
                ShapeKind::Rectangle => {
                    params.outer_length = self.ask("Outer length", params.outer_length, parse_number)?;
                    params.outer_width = self.ask("Outer width", params.outer_width, parse_number)?;
                }
            }
            params.edge_offset = self.ask("Edge offset", params.edge_offset, parse_number)?;
            params.hole_shape = self.ask("Hole shape (circle/square)", hole_label(params.hole_shape), parse_hole)?;
            let size_label = match params.hole_shape {
                HoleKind::Circle => "Hole diameter",
                HoleKind::Square => "Hole side",
            };
            params.hole_size = self.ask(size_label, params.hole_size, parse_number)?;
            params.spacing = self.ask("Spacing", params.spacing, parse_number)?;
            params.pattern = self.ask("Pattern (straight/staggered)", params.pattern.name(), parse_pattern)?;
            params.include_clipped =
                self.ask("Include clipped holes (y/n)", yes_no(params.include_clipped), parse_yes_no)?;

            match params.validate() {
                Ok(_) => return Ok(params),
                Err(e) => {
                    debug!("rejected parameters: {}", e);
                    writeln!(self.output, "{}. Please re-enter the values.", e)?;
                }
            }
        }
    }

    /// One question, repeated until the answer parses.
    fn ask<T, D>(&mut self, label: &str, default: D, parse: fn(&str) -> Result<T, InputParseError>) -> Result<T>
    where
        D: Display,
    {
        let default = default.to_string();
        loop {
            write!(self.output, "{} [{}]: ", label, default)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input ended before the form was complete");
            }
            let answer = match line.trim() {
                "" => default.as_str(),
                text => text,
            };

            match parse(answer) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "  {}", e)?,
            }
        }
    }
}

pub fn cmd_prompt(args: &PromptArgs) -> Result<()> {
    let stdin = io::stdin();
    // Questions go to stderr so `-o -` keeps stdout for the drawing.
    let mut form = Form::new(stdin.lock(), io::stderr());
    let params = form.fill(Params::default())?;

    if let Destination::File(path) = render_layout(&params, &args.output)? {
        eprintln!("Saved {}", path.display());
    }
    Ok(())
}

fn parse_number(input: &str) -> Result<f64, InputParseError> {
    input.parse().map_err(|_| InputParseError::NotANumber(input.to_string()))
}

fn parse_shape(input: &str) -> Result<ShapeKind, InputParseError> {
    ShapeKind::from_name(input)
        .ok_or_else(|| InputParseError::UnknownChoice { input: input.to_string(), choices: SHAPE_CHOICES })
}

fn parse_hole(input: &str) -> Result<HoleKind, InputParseError> {
    HoleKind::from_name(input)
        .ok_or_else(|| InputParseError::UnknownChoice { input: input.to_string(), choices: HOLE_CHOICES })
}

fn parse_pattern(input: &str) -> Result<Pattern, InputParseError> {
    Pattern::from_name(input)
        .ok_or_else(|| InputParseError::UnknownChoice { input: input.to_string(), choices: PATTERN_CHOICES })
}

fn parse_yes_no(input: &str) -> Result<bool, InputParseError> {
    match input.to_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        _ => Err(InputParseError::NotYesNo(input.to_string())),
    }
}

fn shape_label(shape: ShapeKind) -> &'static str {
    match shape {
        ShapeKind::Circle => "circle",
        ShapeKind::Rectangle => "rectangle",
    }
}

fn hole_label(hole: HoleKind) -> &'static str {
    match hole {
        HoleKind::Circle => "circle",
        HoleKind::Square => "square",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "y" } else { "n" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answers: &str) -> (Result<Params>, String) {
        let mut out = Vec::new();
        let result = Form::new(Cursor::new(answers.as_bytes()), &mut out).fill(Params::default());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_answers_keep_defaults() {
        // shape, length, width, offset, hole shape, size, spacing, pattern, clipped
        let (params, transcript) = run("\n\n\n\n\n\n\n\n\n");
        assert_eq!(params.unwrap(), Params::default());
        assert!(transcript.contains("Outer length [24]: "));
        assert!(transcript.contains("Edge offset [0.125]: "));
        assert!(transcript.contains("Pattern (straight/staggered) [straight]: "));
    }

    #[test]
    fn circle_asks_for_diameter_only() {
        let (params, transcript) = run("circle\n12\n0.25\nsquare\n0.5\n1\nstaggered\ny\n");
        let params = params.unwrap();
        assert_eq!(params.shape, ShapeKind::Circle);
        assert_eq!(params.outer_diameter, 12.0);
        assert_eq!(params.hole_shape, HoleKind::Square);
        assert_eq!(params.pattern, Pattern::Staggered);
        assert!(params.include_clipped);
        assert!(!transcript.contains("Outer length"));
        assert!(transcript.contains("Hole side [1]: "));
    }

    #[test]
    fn bad_text_is_asked_again() {
        let (params, transcript) = run("circle\nabc\n12\n\noval\n\n\n\n\nmaybe\nn\n");
        assert_eq!(params.unwrap().outer_diameter, 12.0);
        assert!(transcript.contains("'abc' is not a number"));
        assert!(transcript.contains("'oval' is not one of: circle, square"));
        assert!(transcript.contains("answer yes or no (got 'maybe')"));
    }

    #[test]
    fn invalid_set_restarts_with_previous_answers() {
        // First pass: offset 1 on a diameter 2 plate leaves no usable region.
        let first = "circle\n2\n1\n\n\n\n\n\n";
        // Second pass keeps circle and diameter 2, fixes the offset.
        let second = "\n\n0.25\n\n0.5\n0.75\n\n\n";
        let (params, transcript) = run(&format!("{}{}", first, second));
        let params = params.unwrap();
        assert_eq!(params.outer_diameter, 2.0);
        assert_eq!(params.edge_offset, 0.25);
        assert!(transcript.contains("offset too large for given circle dimensions. Please re-enter the values."));
        assert!(transcript.contains("Outer diameter [2]: "));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (params, _) = run("circle\n");
        assert!(params.is_err());
    }
}
