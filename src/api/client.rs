//
//  booker-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Booker Client
//!
//! [`BookerClient`] ties a [`Transport`] and an [`AccessTokenProvider`]
//! together. Every call goes through [`BookerClient::execute`]:
//!
//! 1. fetch the access token (failure stops here, nothing is sent)
//! 2. insert it as `access_token` into the already merged parameters
//! 3. dispatch by HTTP method
//! 4. map the body onto the request's response model
//!
//! The operations themselves live in [`customer`](super::customer).

use std::sync::Arc;

use tracing::debug;

use super::common::BookerError;
use super::request::{ApiRequest, HttpMethod};
use super::response::{map_response, Mapped};
use super::transport::{HttpTransport, Transport};
use crate::auth::{AccessTokenProvider, StaticToken};
use crate::config::Config;
use crate::models::Model;

/// Client for the Booker customer API.
///
/// Cheap to clone; clones share the transport and the token provider.
///
/// # Example
///
/// ```rust,no_run
/// use booker_client::config::Config;
/// use booker_client::BookerClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::resolve(None)?;
/// let client = BookerClient::from_config(&config)?;
/// let location = client.get_location(10257).await?;
/// println!("{}", location.display_name());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BookerClient {
    transport: Arc<dyn Transport>,
    auth: Arc<dyn AccessTokenProvider>,
}

impl BookerClient {
    pub fn new(transport: Arc<dyn Transport>, auth: Arc<dyn AccessTokenProvider>) -> Self {
        Self { transport, auth }
    }

    /// Builds an HTTP client that sends the configured access token.
    ///
    /// # Errors
    ///
    /// [`BookerError::Config`] when the configuration is invalid or its
    /// access token is missing or malformed.
    pub fn from_config(config: &Config) -> Result<Self, BookerError> {
        config.validate()?;
        let token = config.access_token().ok_or_else(|| {
            BookerError::Config(
                "access_token is required (set it in the config file, via BOOKER_ACCESS_TOKEN or with --token)"
                    .to_string(),
            )
        })?;

        let auth = StaticToken::new(token).map_err(|_| {
            BookerError::Config("access_token must not contain whitespace".to_string())
        })?;

        let transport = HttpTransport::with_timeout(&config.base_url(), config.timeout())?;
        Ok(Self::new(Arc::new(transport), Arc::new(auth)))
    }

    /// Returns the token the next request would carry.
    pub async fn access_token(&self) -> Result<String, BookerError> {
        self.auth.access_token().await
    }

    /// Authorizes, sends and maps a request.
    ///
    /// # Errors
    ///
    /// - [`BookerError::Authentication`] before anything is sent
    /// - [`BookerError::Transport`] from the transport
    /// - [`BookerError::Mapping`] when the body does not fit `M`
    pub async fn execute<M: Model>(&self, request: ApiRequest<M>) -> Result<Mapped<M>, BookerError> {
        let token = self.auth.access_token().await?;
        let request = request.authorize(token);

        debug!(
            method = %request.method,
            path = %request.path,
            model = request.response_model(),
            "Executing Booker request"
        );

        let body = match request.method {
            HttpMethod::Post => self.transport.post(&request.path, &request.params).await?,
            HttpMethod::Get => self.transport.get(&request.path, &request.params).await?,
        };

        map_response(body)
    }
}

impl std::fmt::Debug for BookerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookerClient").finish_non_exhaustive()
    }
}
