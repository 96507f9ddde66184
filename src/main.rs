use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Import from our modularized library
use image_lint_rs::prelude::*;

#[derive(Parser)]
#[command(name = "image_lint_rs")]
#[command(about = "Check image dimensions against width and height bounds", long_about = None)]
struct Cli {
    /// Glob patterns of images to check (`**` matches nested directories)
    #[arg(value_name = "GLOB")]
    patterns: Vec<String>,

    /// Minimum image width in pixels
    #[arg(long, default_value_t = 1)]
    min_width: u32,

    /// Maximum image width in pixels
    #[arg(long, default_value_t = 1920)]
    max_width: u32,

    /// Minimum image height in pixels
    #[arg(long, default_value_t = 1)]
    min_height: u32,

    /// Maximum image height in pixels
    #[arg(long, default_value_t = 1080)]
    max_height: u32,

    /// Show errors as a Markdown list (`--markdown=false` for plain text)
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    markdown: bool,

    /// Show errors as JSON lines, one object per failing file
    #[arg(long)]
    json: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn bounds(&self) -> BoundConfig {
        BoundConfig {
            min_width: self.min_width,
            max_width: self.max_width,
            min_height: self.min_height,
            max_height: self.max_height,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if cli.patterns.is_empty() {
        Cli::command()
            .print_help()
            .context("Failed to print usage")?;
        return Ok(ExitCode::FAILURE);
    }

    let bounds = cli.bounds();
    bounds.warn_if_unsatisfiable();

    let linter = Linter::new(&bounds, OutputStyle::from_flags(cli.markdown, cli.json));
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = linter
        .run(&cli.patterns, &mut out)
        .context("Failed to write report")?;

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Diagnostics go to stderr so stdout carries only the report
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;
    Ok(())
}
