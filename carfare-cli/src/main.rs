// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Carfare CLI - compare car-share and rent-a-car fees from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Quote a rental starting now, using the configured hours and distance
//! carfare
//!
//! # Quote an overnight trip
//! carfare quote --start "2024-04-01 21:00" --end "2024-04-02 07:00" --distance 60
//!
//! # Only some providers
//! carfare --provider times-car,everygo quote --hours 6
//!
//! # JSON output
//! carfare --format json --pretty
//!
//! # List providers
//! carfare providers
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{config, providers, quote};

// ============================================================================
// CLI Definition
// ============================================================================

/// Carfare CLI - car-share and rent-a-car fee comparison.
#[derive(Parser)]
#[command(name = "carfare")]
#[command(about = "Car-share and rent-a-car fee comparison CLI")]
#[command(long_about = r#"
Carfare prices one rental window with every supported provider.

Supported providers:
  • タイムズカーシェア (times-car)
  • TOYOTA SHARE (toyota-share)
  • ENEOSカーシェア (eneos)
  • やさしいカーシェア (yasashii)
  • EveryGo (everygo)
  • eシェアモビ (eshare-mobi)
  • トヨタレンタカー (toyota-rent)
  • ニッポンレンタカー (nippon-rent)
  • ニコニコレンタカー (niconico-rent)
  • タイムズレンタカー (times-rent)
  • オリックスレンタカー (orix-rent)

Examples:
  carfare                                   # Now, configured hours and distance
  carfare quote --hours 6 --distance 40     # Six hours from now
  carfare --provider all                    # Ignore disabled providers
  carfare --format json                     # JSON output
"#)]
#[command(version)]
#[command(author = "Carfare Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'quote' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Providers to compare ("all" for every provider).
    /// Can be comma-separated: "times-car,everygo"
    #[arg(long, short, global = true)]
    pub provider: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare fees for a rental window (default if no command specified).
    #[command(visible_alias = "q")]
    Quote(quote::QuoteArgs),

    /// List available providers.
    #[command(visible_alias = "p")]
    Providers,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("carfare=debug,info")
    } else {
        EnvFilter::new("carfare=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Quote(args)) => quote::run(args, &cli).await,
        Some(Commands::Providers) => providers::run(&cli).await,
        Some(Commands::Config(args)) => config::run(args, &cli).await,
        None => quote::run(&quote::QuoteArgs::default(), &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
