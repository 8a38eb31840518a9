//! # Interactive Collector
//!
//! Reads line items from the cashier until `done`.
//!
//! ## Prompt Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter item name (or 'done' to finish): ──► "done"/EOF ──► finish      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Enter quantity of {name}: ──► parse_quantity ──┐                      │
//! │        │                                        │ rejected             │
//! │        ▼                                        ▼                      │
//! │  Enter price of {name} (per unit): ──►   policy: reprompt | abort      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  items.push(LineItem)  ──► back to the name prompt                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so whole sessions run against in-memory
//! buffers in tests.

use std::io::{BufRead, Write};

use grocer_core::validation::{
    is_done_sentinel, parse_price, parse_quantity, validate_item_name, ValidationResult,
};
use grocer_core::{LineItem, ValidationError};
use tracing::{debug, info};

use crate::config::InvalidInputPolicy;
use crate::error::{CliError, CliResult};

const NAME_PROMPT: &str = "Enter item name (or 'done' to finish): ";

/// Prompts for items on `output` and reads answers from `input`.
pub struct Collector<R, W> {
    input: R,
    output: W,
    policy: InvalidInputPolicy,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W, policy: InvalidInputPolicy) -> Self {
        Collector {
            input,
            output,
            policy,
        }
    }

    /// Runs the prompt cycle and returns the items in entry order.
    ///
    /// ## Returns
    /// - `Ok(items)` once `done` is entered or input ends at the name prompt
    /// - `Err(CliError::Validation)` on rejected input under `Abort`
    /// - `Err(CliError::UnexpectedEof)` if input ends mid-item
    pub fn collect(&mut self) -> CliResult<Vec<LineItem>> {
        let mut items = Vec::new();

        while let Some(name) = self.ask_name()? {
            let quantity = self.ask(
                "quantity",
                &format!("Enter quantity of {name}: "),
                parse_quantity,
            )?;
            let unit_price = self.ask(
                "price",
                &format!("Enter price of {name} (per unit): "),
                parse_price,
            )?;

            debug!(%name, quantity, unit_price = %unit_price, "Item added");
            items.push(LineItem::new(name, quantity, unit_price));
        }

        info!(count = items.len(), "Item collection finished");
        Ok(items)
    }

    /// `None` when the cashier is finished.
    fn ask_name(&mut self) -> CliResult<Option<String>> {
        loop {
            let Some(line) = self.read_line(NAME_PROMPT)? else {
                info!("Input closed at item name, finishing basket");
                return Ok(None);
            };

            if is_done_sentinel(&line) {
                return Ok(None);
            }

            // A bad name is re-asked under every policy
            match validate_item_name(&line) {
                Ok(name) => return Ok(Some(name)),
                Err(err) => self.explain(&err)?,
            }
        }
    }

    fn ask<T>(
        &mut self,
        field: &str,
        prompt: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> CliResult<T> {
        loop {
            let line = self
                .read_line(prompt)?
                .ok_or_else(|| CliError::UnexpectedEof {
                    field: field.to_string(),
                })?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.reject(err)?,
            }
        }
    }

    /// Applies the invalid-input policy. Returns `Ok` when the caller should ask again.
    fn reject(&mut self, err: ValidationError) -> CliResult<()> {
        match self.policy {
            InvalidInputPolicy::Abort => {
                info!(field = err.field(), error = %err, "Input rejected, aborting");
                Err(err.into())
            }
            InvalidInputPolicy::Reprompt => self.explain(&err),
        }
    }

    fn explain(&mut self, err: &ValidationError) -> CliResult<()> {
        info!(field = err.field(), error = %err, "Input rejected, asking again");
        writeln!(self.output, "Invalid {}: {}. Please try again.", err.field(), err)?;
        Ok(())
    }

    /// Writes `prompt` and reads one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
