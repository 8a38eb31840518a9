//! # Grocer Till Entry Point
//!
//! ```text
//! $ grocer
//! === Welcome to Samiullah Grocery Store ===
//! Enter item name (or 'done' to finish): Rice
//! Enter quantity of Rice: 20
//! Enter price of Rice (per unit): 150
//! Enter item name (or 'done' to finish): done
//! ...
//! Final Total: 2835.00
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    grocer_cli::run()
}
