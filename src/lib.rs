//
//  booker-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Booker Client Library
//!
//! A typed client for the Booker customer API: book treatment slots and
//! classes, search class availability and look up locations.
//!
//! ## Overview
//!
//! Every operation follows the same path:
//!
//! ```text
//! arguments -> request builder -> access_token -> transport -> response mapper -> models
//! ```
//!
//! Requests are parameter mappings with PascalCase keys (`LocationID`,
//! `ClassInstanceID`, ...) plus a lowercase `access_token`. Dates travel in
//! the Booker wire form `/Date(<milliseconds since epoch>)/`.
//!
//! ## Module Structure
//!
//! - [`api`]: request building, transport, response mapping and [`BookerClient`]
//! - [`auth`]: access token providers
//! - [`models`]: Booker records (locations, customers, appointments, classes)
//! - [`date`]: the `/Date(ms)/` codec
//! - [`config`]: configuration file and environment handling
//! - [`cli`]: the `booker` command-line interface
//! - [`output`]: table and JSON rendering for the CLI
//! - [`util`]: formatting helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use booker_client::api::Params;
//! use booker_client::models::Customer;
//! use booker_client::{BookerClient, Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = BookerClient::from_config(&Config::resolve(None)?)?;
//!
//! let customer = Customer {
//!     first_name: Some("Aaron".into()),
//!     last_name: Some("Severs".into()),
//!     email: Some("testasevers@example.com".into()),
//!     ..Default::default()
//! };
//!
//! let appointment = client
//!     .create_class_appointment(10257, 3944336, &customer, Params::new())
//!     .await?;
//! println!("Booked {:?}", appointment.booking_number);
//! # Ok(())
//! # }
//! ```

pub mod api;

pub mod auth;

pub mod cli;

pub mod config;

/// `/Date(ms)/` wire date encoding.
pub mod date;

pub mod models;

pub mod output;

pub mod util;

pub use api::{BookerClient, BookerError};

pub use cli::Cli;

pub use config::Config;

/// Application name, used for the config directory.
pub const APP_NAME: &str = "booker";

/// Crate version, sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes of the `booker` binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;

    pub const ERROR: i32 = 1;

    /// Invalid configuration
    pub const CONFIG_ERROR: i32 = 2;

    /// No access token could be obtained, or Booker refused it
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist
    pub const NOT_FOUND: i32 = 8;
}
