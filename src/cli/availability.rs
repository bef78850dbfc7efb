//
//  booker-client
//  cli/availability.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Class availability search.
//!
//! ```text
//! booker availability --location 10257 --from 2015-08-07 --days 7
//! booker availability --location 10257 --from 2015-08-07T09:00:00-04:00 --to 2015-08-07T12:00:00-04:00
//! booker availability --location 10257 --param OnlyIfAvailable=false --json
//! ```

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use serde_json::Value;

use crate::models::ClassInstance;
use crate::output::{format_openings, TableRow};
use crate::util::{format_minutes, format_time, truncate};

use super::{extras, parse_instant, parse_param, GlobalOptions};

#[derive(Args, Debug)]
pub struct AvailabilityCommand {
    /// Booker location ID
    #[arg(long, short = 'l')]
    pub location: i64,

    /// Start of the window (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub from: Option<String>,

    /// End of the window (RFC 3339 or YYYY-MM-DD)
    #[arg(long, conflicts_with = "days")]
    pub to: Option<String>,

    /// Window length in days when --to is not given
    #[arg(long, short = 'd', default_value = "1")]
    pub days: u32,

    /// Show classes without openings too
    #[arg(long)]
    pub all: bool,

    /// Extra request parameter as KEY=VALUE (repeatable)
    #[arg(long = "param", short = 'P', value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,
}

impl AvailabilityCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (from, to) = self.window()?;

        let mut extras = extras(&self.params);
        if self.all && !extras.contains_key("OnlyIfAvailable") {
            extras.insert("OnlyIfAvailable", false);
        }

        let client = global.client()?;
        let classes = client
            .run_class_availability(self.location, &from, &to, extras)
            .await?;

        global.writer().write_list(&classes)
    }

    /// Search window from `--from` and either `--to` or `--days`.
    fn window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let from = match self.from.as_deref() {
            Some(raw) => parse_instant(raw)?,
            None => Utc::now(),
        };
        let to = match self.to.as_deref() {
            Some(raw) => parse_instant(raw)?,
            None => Duration::try_days(i64::from(self.days))
                .and_then(|days| from.checked_add_signed(days))
                .with_context(|| format!("--days {} is out of range", self.days))?,
        };
        if to < from {
            bail!("--to must not be earlier than --from");
        }
        Ok((from, to))
    }
}

impl TableRow for ClassInstance {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Class", "Starts", "Length", "Teacher", "Open", "Price"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            truncate(self.name.as_deref().unwrap_or("-"), 32),
            format_time(self.start_date_time),
            format_minutes(self.duration),
            self.teacher_name.clone().unwrap_or_else(|| "-".to_string()),
            format_openings(self.remaining_capacity, self.capacity, color),
            self.price.as_ref().map(|p| p.display()).unwrap_or_default(),
        ]
    }
}
