//
//  booker-client
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Pre-issued Tokens
//!
//! [`StaticToken`] hands out a token the caller already holds, for example
//! one passed on the command line or minted by another service. It never
//! refreshes; once Booker stops accepting it, requests fail with a 401
//! transport error.

use async_trait::async_trait;

use super::AccessTokenProvider;
use crate::api::common::BookerError;

/// Validates the format of a token string.
///
/// Performs basic validation to ensure the token meets minimum requirements:
/// - Token must not be empty
/// - Token must not contain whitespace characters
///
/// This does NOT check whether Booker accepts the token.
///
/// # Example
///
/// ```rust
/// use booker_client::auth::validate_token;
///
/// assert!(validate_token("MTQzODkzNDQwMDAwMA=="));
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// assert!(!validate_token("has\nnewline"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// A fixed access token.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Wraps `token` after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// [`BookerError::Authentication`] when the token fails
    /// [`validate_token`].
    pub fn new(token: impl Into<String>) -> Result<Self, BookerError> {
        let token = token.into().trim().to_string();
        if !validate_token(&token) {
            return Err(BookerError::Authentication(
                "access token is empty or contains whitespace".to_string(),
            ));
        }
        Ok(Self { token })
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken").field("token", &"<redacted>").finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, BookerError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_token_is_returned_trimmed() {
        let provider = StaticToken::new("  abc123\n").unwrap();
        assert_eq!(provider.access_token().await.unwrap(), "abc123");
    }

    #[test]
    fn malformed_static_token_is_rejected() {
        assert!(matches!(StaticToken::new("   "), Err(BookerError::Authentication(_))));
        assert!(matches!(StaticToken::new("a b"), Err(BookerError::Authentication(_))));
    }

    #[test]
    fn debug_output_hides_the_token() {
        let provider = StaticToken::new("secret-token").unwrap();
        assert!(!format!("{provider:?}").contains("secret-token"));
    }
}
