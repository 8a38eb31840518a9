//! Command-line arguments.

use clap::{ArgAction, Parser};

use crate::config::{InvalidInputPolicy, OutputFormat};

/// Ring up a basket at the console and print the receipt.
///
/// Enter items one at a time; type `done` as the item name to finish.
#[derive(Debug, Parser)]
#[command(name = "grocer", version)]
pub struct Args {
    /// Store name shown in the welcome banner [env: GROCER_STORE_NAME]
    #[arg(long)]
    pub store_name: Option<String>,

    /// What to do when a quantity or price is rejected; bad names are always asked again [env: GROCER_ON_INVALID]
    #[arg(long, value_enum)]
    pub on_invalid: Option<InvalidInputPolicy>,

    /// Receipt output format [env: GROCER_FORMAT]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
