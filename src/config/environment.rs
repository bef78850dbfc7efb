//
//  booker-client
//  config/environment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Booker Environments
//!
//! Booker runs a production and a staging deployment of the customer API.
//! An [`Environment`] selects the default base URL; `base_url` in the
//! configuration replaces it entirely.
//!
//! | Environment | Base URL |
//! |-------------|----------|
//! | `production` | `https://api.booker.com/v4.1/customer` |
//! | `staging` | `https://api-staging.booker.com/v4.1/customer` |

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::api::common::BookerError;

/// Customer API root of the production deployment.
pub const PRODUCTION_BASE_URL: &str = "https://api.booker.com/v4.1/customer";

/// Customer API root of the staging deployment.
pub const STAGING_BASE_URL: &str = "https://api-staging.booker.com/v4.1/customer";

/// Booker deployment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Staging,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Staging => STAGING_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Staging => write!(f, "staging"),
        }
    }
}

impl FromStr for Environment {
    type Err = BookerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" | "stg" => Ok(Self::Staging),
            other => Err(BookerError::Config(format!(
                "unknown environment '{other}' (expected 'production' or 'staging')"
            ))),
        }
    }
}

/// Trims whitespace and trailing slashes from a base URL.
///
/// # Example
///
/// ```rust
/// use booker_client::config::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url(" https://api.booker.com/v4.1/customer/ "),
///     "https://api.booker.com/v4.1/customer"
/// );
/// ```
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
