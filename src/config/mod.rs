//
//  booker-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings the client needs to reach Booker: which deployment, where it
//! lives, and the access token to send.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/booker/config.toml`
//! - **macOS**: `~/Library/Application Support/booker/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\booker\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! environment = "staging"
//! access_token = "MTQzODkzNDQwMDAwMA"
//! timeout_secs = 30
//!
//! # Optional override of the environment default
//! base_url = "https://api-staging.booker.com/v4.1/customer"
//! ```
//!
//! ## Environment Variables
//!
//! These take precedence over the file:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `BOOKER_ENVIRONMENT` | `environment` |
//! | `BOOKER_BASE_URL` | `base_url` |
//! | `BOOKER_ACCESS_TOKEN` | `access_token` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use booker_client::config::Config;
//!
//! let config = Config::resolve(None)?;
//! println!("Talking to {}", config.base_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod environment;
mod file;

pub use environment::*;
pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::api::common::BookerError;
use crate::api::transport::DEFAULT_TIMEOUT;

pub const ENV_ENVIRONMENT: &str = "BOOKER_ENVIRONMENT";
pub const ENV_BASE_URL: &str = "BOOKER_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "BOOKER_ACCESS_TOKEN";

/// Client configuration.
///
/// Every field is optional in the file; missing ones fall back to the
/// environment defaults.
///
/// # Examples
///
/// ```rust
/// use booker_client::config::{Config, Environment};
///
/// let config: Config = toml::from_str(r#"
///     environment = "staging"
///     access_token = "abc123"
/// "#).unwrap();
///
/// assert_eq!(config.environment, Environment::Staging);
/// assert_eq!(config.base_url(), Environment::Staging.base_url());
/// assert_eq!(config.access_token(), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Deployment whose default URLs are used.
    #[serde(default)]
    pub environment: Environment,

    /// Replaces the environment's customer API root.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Token sent as `access_token` with every request.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads the file at `path` (or the default location) and applies the
    /// process environment on top.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        let mut config = if config_exists(&path) {
            debug!(path = %path.display(), "Loading config");
            Self::load_from(&path)?
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Default location of `config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replaces fields with values found through `lookup`.
    ///
    /// `lookup` receives the variable names listed in the module docs; empty
    /// values are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use booker_client::config::{Config, Environment};
    ///
    /// let mut config = Config::default();
    /// config
    ///     .apply_env_overrides(|key| match key {
    ///         "BOOKER_ENVIRONMENT" => Some("staging".to_string()),
    ///         "BOOKER_ACCESS_TOKEN" => Some("from-env".to_string()),
    ///         _ => None,
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(config.environment, Environment::Staging);
    /// assert_eq!(config.access_token(), Some("from-env"));
    /// ```
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), BookerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(environment) = get(ENV_ENVIRONMENT) {
            self.environment = environment.parse()?;
        }
        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
        if let Some(access_token) = get(ENV_ACCESS_TOKEN) {
            self.access_token = Some(access_token);
        }
        Ok(())
    }

    /// Customer API root in effect.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => normalize_base_url(url),
            None => self.environment.base_url().to_string(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Configured token, ignoring blank values.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Checks that the base URL is an absolute http(s) URL and the timeout
    /// is non-zero.
    pub fn validate(&self) -> Result<(), BookerError> {
        let base_url = self.base_url();
        let url = Url::parse(&base_url)
            .map_err(|e| BookerError::Config(format!("base_url '{base_url}' is not a valid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BookerError::Config(format!(
                "base_url '{base_url}' must use http or https"
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(BookerError::Config("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_production() {
        let config = Config::default();
        assert_eq!(config.base_url(), PRODUCTION_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.access_token().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn override_replaces_environment_url() {
        let config = Config {
            environment: Environment::Staging,
            base_url: Some("http://localhost:8080/api/".into()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let config = Config {
            access_token: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(config.access_token(), None);
    }

    #[test]
    fn load_reads_every_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "environment = \"staging\"\naccess_token = \"abc123\"\ntimeout_secs = 10\n",
        )
        .unwrap();
        let config = Config {
            environment: Environment::Staging,
            access_token: Some("abc123".into()),
            timeout_secs: Some(10),
            ..Default::default()
        };

        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn resolve_with_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert!(Config::resolve(Some(&dir.path().join("absent.toml"))).is_ok());
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "environment = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
    }

    #[test]
    fn environment_variables_win_over_file_values() {
        let mut config = Config {
            access_token: Some("file-token".into()),
            base_url: Some("http://file.example".into()),
            ..Default::default()
        };
        config
            .apply_env_overrides(env(&[
                (ENV_ACCESS_TOKEN, ""),
                (ENV_BASE_URL, "http://127.0.0.1:3000"),
            ]))
            .unwrap();

        assert_eq!(config.access_token(), Some("file-token"));
        assert_eq!(config.base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn unknown_environment_variable_value_is_a_config_error() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(env(&[(ENV_ENVIRONMENT, "moon")]))
            .unwrap_err();
        assert!(matches!(err, BookerError::Config(_)));
    }

    #[test]
    fn validate_rejects_bad_urls_and_zero_timeout() {
        let bad_url = Config {
            base_url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(matches!(bad_url.validate(), Err(BookerError::Config(_))));

        let ftp = Config {
            base_url: Some("ftp://booker.example".into()),
            ..Default::default()
        };
        assert!(matches!(ftp.validate(), Err(BookerError::Config(_))));

        let zero = Config {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(BookerError::Config(_))));
    }
}
