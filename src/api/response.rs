//
//  booker-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Mapping
//!
//! Turns a decoded response body into model instances.
//!
//! Booker answers either with the resource itself or with an envelope that
//! holds it next to status fields:
//!
//! ```json
//! {"IsSuccess": true, "Results": [ ... ]}
//! {"IsSuccess": true, "Appointment": { ... }}
//! {"IsSuccess": true, "ClassInstances": [ ... ]}
//! ```
//!
//! The payload is looked up under `Results`, then under the model name, then
//! under its plural; a body with none of those keys is the resource itself.
//! An object payload yields one instance and an array yields one instance
//! per element, in order.

use serde_json::Value;

use super::common::BookerError;
use crate::models::{kind_of, Model};

/// Key holding the payload of list-style responses.
const RESULTS_KEY: &str = "Results";

/// One or many model instances read from a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapped<M> {
    One(M),
    Many(Vec<M>),
}

impl<M: Model> Mapped<M> {
    /// The single instance of an object-shaped response.
    ///
    /// # Errors
    ///
    /// [`BookerError::Mapping`] when the response was a list.
    pub fn into_one(self) -> Result<M, BookerError> {
        match self {
            Self::One(model) => Ok(model),
            Self::Many(models) => Err(BookerError::Mapping(format!(
                "expected a single {}, got a list of {}",
                M::NAME,
                models.len()
            ))),
        }
    }

    /// All instances; a single record becomes a one-element list.
    pub fn into_many(self) -> Vec<M> {
        match self {
            Self::One(model) => vec![model],
            Self::Many(models) => models,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(models) => models.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps a response body onto model `M`.
///
/// # Errors
///
/// [`BookerError::Mapping`] when the payload is neither an object nor an
/// array, or an element does not fit `M`.
///
/// # Example
///
/// ```rust
/// use booker_client::api::{map_response, Mapped};
/// use booker_client::models::ClassInstance;
/// use serde_json::json;
///
/// let mapped = map_response::<ClassInstance>(json!({
///     "IsSuccess": true,
///     "Results": [{"ID": 1}, {"ID": 2}]
/// }))?;
/// let ids: Vec<_> = mapped.into_many().into_iter().map(|c| c.id).collect();
/// assert_eq!(ids, vec![Some(1), Some(2)]);
/// # Ok::<(), booker_client::BookerError>(())
/// ```
pub fn map_response<M: Model>(body: Value) -> Result<Mapped<M>, BookerError> {
    match unwrap_envelope::<M>(body) {
        Value::Array(items) => items
            .into_iter()
            .map(M::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Mapped::Many),
        object @ Value::Object(_) => M::from_value(object).map(Mapped::One),
        other => Err(BookerError::Mapping(format!(
            "expected {} data, got {}",
            M::NAME,
            kind_of(&other)
        ))),
    }
}

fn unwrap_envelope<M: Model>(body: Value) -> Value {
    let Value::Object(mut map) = body else {
        return body;
    };

    let plural = format!("{}s", M::NAME);
    for key in [RESULTS_KEY, M::NAME, plural.as_str()] {
        match map.remove(key) {
            Some(Value::Null) | None => continue,
            Some(payload) => return payload,
        }
    }
    Value::Object(map)
}
