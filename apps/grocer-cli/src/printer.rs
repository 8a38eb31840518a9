//! # Receipt Printer
//!
//! Renders a priced [`Receipt`] for the console.
//!
//! ## Text Layout
//! ```text
//! === Welcome to Samiullah Grocery Store ===     ◄── write_welcome (before items)
//!
//! === Your Receipt ===                          ◄── write_receipt
//! Date: 2026-10-18 09:30 UTC
//! Apple  x10  =  500.00 PKR
//! Bread  x5  =  500.00 PKR
//!
//! Subtotal: 1000.00
//! Discount: 0.00
//! Tax: 50.00
//! Final Total: 1050.00
//!
//! === Thank you for shopping! ===
//! ```

use std::io::Write;

use grocer_core::{Receipt, CURRENCY_CODE};
use serde::Serialize;

use crate::config::{OutputFormat, StoreConfig};
use crate::error::CliResult;

/// Receipt plus the store context it was issued under, for JSON output.
#[derive(Debug, Serialize)]
struct ReceiptDocument<'a> {
    store: &'a str,
    currency: &'static str,
    #[serde(flatten)]
    receipt: &'a Receipt,
}

/// Writes the opening banner.
pub fn write_welcome<W: Write>(out: &mut W, config: &StoreConfig) -> CliResult<()> {
    writeln!(out, "=== Welcome to {} ===", config.store_name)?;
    Ok(())
}

/// Writes the receipt in the configured format and flushes.
pub fn write_receipt<W: Write>(
    out: &mut W,
    receipt: &Receipt,
    config: &StoreConfig,
) -> CliResult<()> {
    let rendered = match config.format {
        OutputFormat::Text => render_text(receipt),
        OutputFormat::Json => render_json(receipt, config)?,
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Human-readable receipt.
pub fn render_text(receipt: &Receipt) -> String {
    let mut text = String::new();

    text.push_str("\n=== Your Receipt ===\n");
    text.push_str(&format!(
        "Date: {}\n",
        receipt.issued_at.format("%Y-%m-%d %H:%M UTC")
    ));

    for line in &receipt.lines {
        text.push_str(&format!(
            "{}  x{}  =  {} {}\n",
            line.name, line.quantity, line.line_total, CURRENCY_CODE
        ));
    }

    text.push_str(&format!("\nSubtotal: {}\n", receipt.subtotal));
    text.push_str(&format!("Discount: {}\n", receipt.discount));
    text.push_str(&format!("Tax: {}\n", receipt.tax));
    text.push_str(&format!("Final Total: {}\n", receipt.total));
    text.push_str("\n=== Thank you for shopping! ===\n");

    text
}

/// Pretty JSON receipt; amounts are in paisa.
pub fn render_json(receipt: &Receipt, config: &StoreConfig) -> serde_json::Result<String> {
    let doc = ReceiptDocument {
        store: &config.store_name,
        currency: CURRENCY_CODE,
        receipt,
    };
    let mut json = serde_json::to_string_pretty(&doc)?;
    json.push('\n');
    Ok(json)
}
