//! CLI command implementations.
//!
//! - `generate` - Render a layout from command-line options
//! - `job` - Render a YAML job file, or print an example one
//! - `prompt` - Fill in the parameter form interactively

pub mod common;
pub mod generate;
pub mod job;
pub mod prompt;

pub use generate::{cmd_generate, GenerateArgs};
pub use job::{cmd_job, JobArgs};
pub use prompt::{cmd_prompt, PromptArgs};
