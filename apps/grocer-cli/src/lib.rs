//! # Grocer Console Till
//!
//! Wires stdin/stdout to `grocer-core`.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          grocer-cli                                     │
//! │                                                                         │
//! │  cli.rs ────────► clap arguments                                       │
//! │  config.rs ─────► StoreConfig (flags > GROCER_* env > defaults)        │
//! │  collector.rs ──► prompt cycle, invalid-input policy                   │
//! │  printer.rs ────► text / JSON receipt                                  │
//! │  error.rs ──────► CliError + exit codes                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod printer;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use grocer_core::{PricingPolicy, Receipt};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Args;
use collector::Collector;
use config::{OutputFormat, StoreConfig};
use error::CliResult;

/// Runs the till as a process and returns its exit status.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse flags ─────────► clap                                         │
/// │  2. Initialize Logging ──► tracing-subscriber on stderr                 │
/// │  3. Load Config ─────────► defaults ◄ GROCER_* env ◄ flags              │
/// │  4. Session ─────────────► welcome, collect, price, print              │
/// │  5. Exit ────────────────► 0, or CliError::exit_code()                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run_with_args(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(code = err.code(), error = %err, "Session failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run_with_args(args: &Args) -> CliResult<()> {
    let config = StoreConfig::from_env()?.with_args(args);
    info!(?config, "Starting Grocer POS till");

    let stdin = io::stdin();
    let input = stdin.lock();

    // JSON output keeps stdout machine-readable; prompts go to stderr instead
    match config.format {
        OutputFormat::Text => run_session(input, io::stdout(), io::stdout(), &config, Utc::now)?,
        OutputFormat::Json => run_session(input, io::stderr(), io::stdout(), &config, Utc::now)?,
    };

    Ok(())
}

/// One customer from welcome banner to printed receipt.
///
/// `prompts` receives the banner, questions and re-prompt messages; `out`
/// receives only the receipt. `now` stamps the receipt once collection ends.
pub fn run_session<R, P, O, C>(
    input: R,
    mut prompts: P,
    mut out: O,
    config: &StoreConfig,
    now: C,
) -> CliResult<Receipt>
where
    R: BufRead,
    P: Write,
    O: Write,
    C: FnOnce() -> DateTime<Utc>,
{
    printer::write_welcome(&mut prompts, config)?;

    let items = Collector::new(input, &mut prompts, config.on_invalid).collect()?;
    let receipt = Receipt::calculate(&items, &PricingPolicy::default(), now())?;

    info!(
        items = receipt.item_count(),
        subtotal = %receipt.subtotal,
        discount = %receipt.discount,
        tax = %receipt.tax,
        total = %receipt.total,
        "Receipt calculated"
    );

    printer::write_receipt(&mut out, &receipt, config)?;
    Ok(receipt)
}

/// Initializes the tracing subscriber for structured logging on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=...` - Full control, overrides `-v`
/// - `-v` - INFO for grocer crates
/// - `-vv` - DEBUG for grocer crates (every accepted item)
/// - Default: WARN
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,grocer_cli=info,grocer_core=info",
        _ => "warn,grocer_cli=debug,grocer_core=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
