//
//  booker-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Request building, transport and response mapping for the Booker customer
//! API.
//!
//! ## Architecture
//!
//! - [`request`]: parameter mappings and the [`ApiRequest`] description of a call
//! - [`customer`]: the booking operations, as builders and client methods
//! - [`transport`]: the [`Transport`] seam and its `reqwest` implementation
//! - [`response`]: mapping of response bodies onto models
//! - [`client`]: [`BookerClient`], which runs the pipeline
//! - [`common`]: error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use booker_client::api::{BookerClient, HttpTransport, Params};
//! use booker_client::auth::StaticToken;
//! use chrono::{Duration, Utc};
//!
//! # async fn example() -> Result<(), booker_client::BookerError> {
//! let base = "https://api-staging.booker.com/v4.1/customer";
//! let client = BookerClient::new(
//!     Arc::new(HttpTransport::new(base)?),
//!     Arc::new(StaticToken::new("MTQzODkzNDQwMDAwMA")?),
//! );
//!
//! let now = Utc::now();
//! let classes = client
//!     .run_class_availability(10257, &now, &(now + Duration::days(7)), Params::new())
//!     .await?;
//! println!("{} classes", classes.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Everything returns [`BookerError`]; see [`common`] for the variants.

/// Core client that authorizes, sends and maps requests.
pub mod client;

/// Error types shared by the whole crate.
pub mod common;

/// Booking operations of the customer service.
pub mod customer;

pub mod request;

pub mod response;

pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::BookerClient;
pub use common::{BookerError, TransportError};
pub use request::{ApiRequest, HttpMethod, Params};
pub use response::{map_response, Mapped};
pub use transport::{HttpTransport, Transport};
