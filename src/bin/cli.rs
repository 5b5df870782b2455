//! vsarch CLI
//!
//! Downloads the Linux x64 stable tarball for each VS Code release in an
//! inclusive version range, driven by the release changelog pages.

use std::path::PathBuf;

use clap::Parser;
use vsarch::{error::Result, models::Config, pipeline};

/// vsarch - VS Code release tarball fetcher
#[derive(Parser, Debug)]
#[command(name = "vsarch", version, about = "VS Code release tarball fetcher")]
struct Cli {
    /// First version number to process, e.g. 45
    #[arg(short, long)]
    from: u32,

    /// Last version number to process (inclusive), e.g. 47
    #[arg(short, long)]
    to: u32,

    /// Path to an optional config file (defaults apply when absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    config.validate()?;

    log::info!(
        "Fetching versions 1.{} through 1.{} into {}",
        cli.from,
        cli.to,
        config.output.dir
    );

    pipeline::run_batch(&config, cli.from, cli.to).await?;

    Ok(())
}
