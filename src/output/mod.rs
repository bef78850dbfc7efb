//
//  booker-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting Module
//!
//! Renders command results either for people (tables and field lists) or for
//! scripts (pretty JSON).
//!
//! ## Output Formats
//!
//! | Format | Use Case | Selected by |
//! |--------|----------|-------------|
//! | Table | Terminal display | default |
//! | JSON | Piping to `jq` and other tools | `--json` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use booker_client::output::{OutputFormat, OutputWriter, TableOutput};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Booking {
//!     number: String,
//! }
//!
//! impl TableOutput for Booking {
//!     fn print_table(&self, _color: bool) {
//!         println!("Booking {}", self.number);
//!     }
//! }
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&Booking { number: "B-77".into() })?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Colors follow `console::colors_enabled()`, which honors `NO_COLOR` and
//! whether stdout is a terminal.

mod table;

pub use table::*;

use console::style;
use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes results in the selected [`OutputFormat`].
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Prints one record.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Prints records as rows of a single table, or as a JSON array.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info("No results");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::headers())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    pub fn write_error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Human-readable rendering of a single record.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// Rendering of a record as one row of a list table.
pub trait TableRow {
    fn headers() -> Vec<&'static str>;

    fn row(&self, color: bool) -> Vec<String>;
}

/// Prints a bold heading underlined with dashes.
pub fn print_header(text: &str, color: bool) {
    if color {
        println!("{}", style(text).bold());
    } else {
        println!("{}", text);
    }
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints an aligned `key: value` line.
pub fn print_field(key: &str, value: &str, color: bool) {
    let label = format!("{:<14}", format!("{key}:"));
    if color {
        println!("  {}{}", style(label).dim(), value);
    } else {
        println!("  {}{}", label, value);
    }
}
