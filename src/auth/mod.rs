//
//  booker-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Booker authenticates every call with an `access_token` parameter. The
//! client asks an [`AccessTokenProvider`] for that token before each request
//! and fails with [`BookerError::Authentication`](crate::BookerError::Authentication)
//! without sending anything when the provider cannot produce one.
//!
//! Obtaining and refreshing tokens is the provider's business. The crate
//! ships [`StaticToken`] for tokens issued elsewhere; applications with their
//! own token service implement the trait.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use booker_client::auth::AccessTokenProvider;
//! use booker_client::BookerError;
//!
//! struct FromVault;
//!
//! #[async_trait]
//! impl AccessTokenProvider for FromVault {
//!     async fn access_token(&self) -> Result<String, BookerError> {
//!         std::env::var("VAULT_BOOKER_TOKEN")
//!             .map_err(|_| BookerError::Authentication("token not in vault".into()))
//!     }
//! }
//! ```

mod token;

pub use token::*;

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::common::BookerError;

/// Source of the `access_token` sent with every request.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Returns a token valid for the next request, fetching or refreshing it
    /// as needed.
    ///
    /// # Errors
    ///
    /// [`BookerError::Authentication`] when no token can be obtained.
    async fn access_token(&self) -> Result<String, BookerError>;
}

#[async_trait]
impl<P: AccessTokenProvider + ?Sized> AccessTokenProvider for Arc<P> {
    async fn access_token(&self) -> Result<String, BookerError> {
        (**self).access_token().await
    }
}
