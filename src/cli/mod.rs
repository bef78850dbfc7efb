//
//  booker-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command-Line Interface
//!
//! Argument definitions and command handlers for the `booker` binary.
//!
//! ## Command Structure
//!
//! ```text
//! booker [GLOBAL OPTIONS] <COMMAND> [ARGS]
//!
//! booker availability --location 10257 --from 2015-08-07 --days 1
//! booker book-class --location 10257 --class-instance 3944336 --first-name Aaron ...
//! booker location 10257
//! ```
//!
//! ## Global Options
//!
//! - `--config <PATH>`: configuration file instead of the default location
//! - `--environment <ENV>`: `production` or `staging`
//! - `--token <TOKEN>`: access token, overriding the configured one
//! - `--json`: machine-readable output

mod appointment;
mod availability;
mod location;

pub use appointment::BookClassCommand;
pub use availability::AvailabilityCommand;
pub use location::LocationCommand;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::api::{BookerClient, Params};
use crate::config::{Config, Environment};
use crate::output::{OutputFormat, OutputWriter};

#[derive(Parser, Debug)]
#[command(
    name = "booker",
    version,
    about = "Book appointments and classes through the Booker customer API",
    propagate_version = true,
    after_help = "Use 'booker <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configuration file to use
    #[arg(long, global = true, env = "BOOKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Booker environment (production or staging)
    #[arg(long, short = 'e', global = true)]
    pub environment: Option<Environment>,

    /// Access token sent with every request
    #[arg(long, global = true, env = "BOOKER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Configuration with file, environment variables and flags applied.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::resolve(self.config.as_deref())?;
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if let Some(token) = &self.token {
            config.access_token = Some(token.clone());
        }
        Ok(config)
    }

    /// Client for the resolved configuration.
    pub fn client(&self) -> Result<BookerClient> {
        Ok(BookerClient::from_config(&self.config()?)?)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search class availability at a location
    #[command(visible_alias = "avail")]
    Availability(AvailabilityCommand),

    /// Book a customer into a class instance
    #[command(name = "book-class")]
    BookClass(BookClassCommand),

    /// Show a location
    Location(LocationCommand),

    /// Show version information
    Version,
}

/// Parses a `--param Key=Value` argument.
///
/// The value is read as JSON when it parses (`true`, `42`, `{"a":1}`) and
/// kept as a string otherwise.
pub fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Collects parsed `--param` arguments into request extras.
pub(crate) fn extras(params: &[(String, Value)]) -> Params {
    params.iter().cloned().collect()
}

/// Parses `--from` / `--to` values: RFC 3339, or a date meaning local
/// midnight.
pub(crate) fn parse_instant(raw: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("'{raw}' is neither an RFC 3339 timestamp nor a YYYY-MM-DD date"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("invalid time of day")?;
    let local = Local
        .from_local_datetime(&midnight)
        .earliest()
        .with_context(|| format!("local midnight of {raw} does not exist"))?;
    Ok(local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn params_parse_json_values_with_string_fallback() {
        assert_eq!(parse_param("OnlyIfAvailable=false").unwrap(), ("OnlyIfAvailable".into(), json!(false)));
        assert_eq!(parse_param("Count=3").unwrap(), ("Count".into(), json!(3)));
        assert_eq!(parse_param("another_option=foo").unwrap(), ("another_option".into(), json!("foo")));
        assert_eq!(parse_param("Note=a=b").unwrap(), ("Note".into(), json!("a=b")));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn extras_keep_last_value_for_repeated_keys() {
        let params = vec![("A".to_string(), json!(1)), ("A".to_string(), json!(2))];
        assert_eq!(extras(&params).get("A"), Some(&json!(2)));
    }

    #[test]
    fn instants_accept_rfc3339_and_dates() {
        let instant = parse_instant("2015-08-07T00:00:00-04:00").unwrap();
        assert_eq!(instant.timestamp_millis(), 1438934400000);
        assert!(parse_instant("2015-08-07").is_ok());
        assert!(parse_instant("next tuesday").is_err());
    }

    #[test]
    fn global_options_parse() {
        let cli = Cli::try_parse_from([
            "booker",
            "--environment",
            "staging",
            "--json",
            "location",
            "10257",
        ])
        .unwrap();
        assert_eq!(cli.global.environment, Some(Environment::Staging));
        assert!(cli.global.json);
        assert!(matches!(cli.command, Commands::Location(_)));
    }
}
