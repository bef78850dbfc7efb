//
//  booker-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Parameters
//!
//! Booker takes every argument of an operation as one keyed mapping: the JSON
//! body of a POST, or the query string of a GET. [`Params`] is that mapping
//! and [`ApiRequest`] ties it to a method, an endpoint path, and the model the
//! response is read into.
//!
//! ## Merge order
//!
//! Request builders produce a base mapping, then lay caller extras over it
//! with [`Params::merge`] (extras win on collision), and the client inserts
//! `access_token` last with [`ApiRequest::authorize`].
//!
//! ```rust
//! use booker_client::api::Params;
//!
//! let mut params = Params::new()
//!     .with("LocationID", 10257)
//!     .with("OnlyIfAvailable", true);
//! params.merge(Params::new().with("OnlyIfAvailable", false).with("another_option", "foo"));
//!
//! assert_eq!(params.get("OnlyIfAvailable"), Some(&false.into()));
//! assert_eq!(params.get("another_option"), Some(&"foo".into()));
//! assert_eq!(params.len(), 3);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::BookerError;
use crate::models::{kind_of, Model};

/// Key under which the access token travels with every request.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Keyed request mapping in wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a nested model under `key`.
    pub fn with_model<M: Model>(mut self, key: impl Into<String>, model: &M) -> Self {
        self.0.insert(key.into(), Value::Object(model.to_params()));
        self
    }

    /// Sets `key`, returning the value it replaces.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lays `extras` over this mapping. On a key collision the value from
    /// `extras` replaces the existing one.
    pub fn merge(&mut self, extras: Params) {
        for (key, value) in extras.0 {
            self.0.insert(key, value);
        }
    }

    /// Flattens the mapping into query pairs for GET requests.
    ///
    /// Strings are sent as-is, `null` as an empty value, everything else
    /// as its JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Params {
    type Error = BookerError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(BookerError::Mapping(format!(
                "request parameters must be an object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A fully described API call whose response is read as `M`.
///
/// Produced by the builders in [`customer`](super::customer); executed by
/// [`BookerClient::execute`](super::BookerClient::execute).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<M> {
    pub method: HttpMethod,
    pub path: String,
    pub params: Params,
    response: PhantomData<fn() -> M>,
}

impl<M: Model> ApiRequest<M> {
    pub fn new(method: HttpMethod, path: impl Into<String>, params: Params) -> Self {
        Self {
            method,
            path: path.into(),
            params,
            response: PhantomData,
        }
    }

    pub fn post(path: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Post, path, params)
    }

    pub fn get(path: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Get, path, params)
    }

    /// Lays caller extras over the parameters.
    pub fn with_extras(mut self, extras: Params) -> Self {
        self.params.merge(extras);
        self
    }

    /// Inserts the access token. Applied after every merge, so extras can
    /// never replace it.
    pub fn authorize(mut self, access_token: impl Into<String>) -> Self {
        self.params.insert(ACCESS_TOKEN_KEY, access_token.into());
        self
    }

    /// Name of the model the response is read into.
    pub fn response_model(&self) -> &'static str {
        M::NAME
    }
}
