//
//  booker-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The [`Transport`] trait is the seam between request building and the
//! network. [`HttpTransport`] is the production implementation over
//! `reqwest`; tests substitute an in-memory one.
//!
//! ## Wire conventions
//!
//! - POST sends the parameter mapping as a JSON body
//! - GET sends it as query pairs
//! - a 2xx body is decoded as JSON; an empty body decodes to `null`
//! - a 2xx body carrying a non-null `ErrorCode` or `"IsSuccess": false` is a
//!   rejection, reported as [`TransportError::Rejected`]
//!
//! Nothing is retried here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::common::{status_error, BookerError, TransportError};
use super::request::Params;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes API calls and returns the decoded response body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `params` as a JSON body to `path`.
    async fn post(&self, path: &str, params: &Params) -> Result<Value, BookerError>;

    /// GETs `path` with `params` as the query string.
    async fn get(&self, path: &str, params: &Params) -> Result<Value, BookerError>;
}

/// `reqwest`-backed [`Transport`] rooted at a base URL.
///
/// # Example
///
/// ```rust,no_run
/// use booker_client::api::{HttpTransport, Params, Transport};
///
/// # async fn example() -> Result<(), booker_client::BookerError> {
/// let transport = HttpTransport::new("https://api.example.com/v4.1/customer")?;
/// let body = transport
///     .get("/location/10257", &Params::new().with("access_token", "token"))
///     .await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, BookerError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, BookerError> {
        let http = Client::builder()
            .user_agent(format!("booker-client/{}", crate::VERSION))
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wraps an existing `reqwest` client.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read_body(&self, path: &str, response: reqwest::Response) -> Result<Value, BookerError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(%status, path, "Booker request failed");
            return Err(status_error(status, &text).into());
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            TransportError::InvalidBody(format!("{path} returned a body that is not JSON: {e}"))
        })?;

        check_rejection(&body)?;
        Ok(body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, params: &Params) -> Result<Value, BookerError> {
        debug!(path, keys = params.len(), "POST");
        let response = self.http.post(self.url(path)).json(params).send().await?;
        self.read_body(path, response).await
    }

    async fn get(&self, path: &str, params: &Params) -> Result<Value, BookerError> {
        debug!(path, keys = params.len(), "GET");
        let response = self
            .http
            .get(self.url(path))
            .query(&params.query_pairs())
            .send()
            .await?;
        self.read_body(path, response).await
    }
}

/// Fails on a success-status body that reports an error.
fn check_rejection(body: &Value) -> Result<(), TransportError> {
    let code = body.get("ErrorCode").filter(|c| !c.is_null());
    let failed = body.get("IsSuccess").and_then(Value::as_bool) == Some(false);

    if code.is_none() && !failed {
        return Ok(());
    }

    let message = body
        .get("ErrorMessage")
        .and_then(Value::as_str)
        .unwrap_or("request was not successful")
        .to_string();

    Err(TransportError::Rejected {
        code: code.and_then(Value::as_i64),
        message,
    })
}
