//! perfgen - perforated plate layouts from the command line
//!
//! Usage:
//!   perfgen generate [options]          Render a layout from options
//!   perfgen job <job.yaml> [options]    Render a YAML job file
//!   perfgen job --example               Print an example job file
//!   perfgen prompt [-o <file>]          Fill in the parameters interactively

mod cli;

use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::{cmd_generate, cmd_job, cmd_prompt, GenerateArgs, JobArgs, PromptArgs};

/// Perforated plate layouts as layered DXF drawings
#[derive(Parser, Debug)]
#[command(name = "perfgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a layout from command-line options
    Generate(GenerateArgs),
    /// Render a YAML job file
    Job(JobArgs),
    /// Ask for every parameter on the terminal, then render
    Prompt(PromptArgs),
}

/// Log to stderr so stdout stays free for `-o -`. `RUST_LOG` wins over the
/// level picked by `-v`/`-q`.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Command::Generate(args) => cmd_generate(args),
        Command::Job(args) => cmd_job(args),
        Command::Prompt(args) => cmd_prompt(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
