//
//  booker-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table rendering on top of `comfy-table`.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

/// Creates an empty table with the standard preset and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for list tables.
///
/// # Example
///
/// ```rust
/// use booker_client::output::TableBuilder;
///
/// let table = TableBuilder::new()
///     .color(false)
///     .headers(["ID", "Class"])
///     .row(["3944336", "Morning Yoga"])
///     .build();
/// assert!(table.to_string().contains("Morning Yoga"));
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row; cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors an appointment or class status by meaning.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    match status.to_lowercase().as_str() {
        "booked" | "confirmed" | "open" | "available" => style(status).green().to_string(),
        "completed" | "checked in" => style(status).blue().to_string(),
        "cancelled" | "canceled" | "no show" | "full" => style(status).red().to_string(),
        "pending" | "tentative" | "waitlist" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Formats remaining capacity, red when the class is full.
pub fn format_openings(remaining: Option<i64>, capacity: Option<i64>, color: bool) -> String {
    let text = match (remaining, capacity) {
        (Some(r), Some(c)) => format!("{r}/{c}"),
        (Some(r), None) => r.to_string(),
        _ => return "-".to_string(),
    };

    match remaining {
        Some(r) if color && r <= 0 => style(text).red().to_string(),
        Some(_) if color => style(text).green().to_string(),
        _ => text,
    }
}
