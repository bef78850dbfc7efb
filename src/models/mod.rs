//
//  booker-client
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Booker Resource Models
//!
//! Typed mirrors of the resources exchanged with the Booker customer API.
//!
//! Every model is a plain struct whose fields are all optional:
//!
//! - field names are `snake_case` in Rust and exact PascalCase on the wire
//! - keys the model does not declare are ignored when reading a mapping
//! - declared keys that are absent stay `None`
//! - `None` fields are left out of outgoing mappings
//! - date fields are carried as `/Date(<ms>)/` (see [`crate::date`])
//!
//! ## Example
//!
//! ```rust
//! use booker_client::models::{Address, Model};
//! use serde_json::json;
//!
//! let address = Address::from_value(json!({
//!     "Street1": "680 Mission St",
//!     "City": "San Francisco",
//!     "Unused": 42
//! }))?;
//!
//! assert_eq!(address.city.as_deref(), Some("San Francisco"));
//! assert_eq!(address.zip, None);
//! # Ok::<(), booker_client::BookerError>(())
//! ```

mod address;
mod appointment;
mod available_time;
mod class_instance;
mod customer;
mod location;

pub use address::*;
pub use appointment::*;
pub use available_time::*;
pub use class_instance::*;
pub use customer::*;
pub use location::*;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::common::BookerError;

/// Capability shared by every Booker resource.
///
/// The provided methods convert between a model and the keyed mapping the
/// API speaks. Implementors only need the serde derives.
pub trait Model: Serialize + DeserializeOwned + Default + Clone + PartialEq + Debug {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Builds the model from a keyed mapping.
    ///
    /// # Errors
    ///
    /// - [`BookerError::Format`] when a date field holds a string that is not
    ///   a wire date
    /// - [`BookerError::Mapping`] when `value` is not an object or a declared
    ///   field holds a value of the wrong type
    fn from_value(value: Value) -> Result<Self, BookerError> {
        if !value.is_object() {
            return Err(BookerError::Mapping(format!(
                "expected an object for {}, got {}",
                Self::NAME,
                kind_of(&value)
            )));
        }
        crate::date::clear_field_failure();
        serde_json::from_value(value).map_err(|e| {
            crate::date::take_field_failure()
                .unwrap_or_else(|| BookerError::Mapping(format!("invalid {}: {}", Self::NAME, e)))
        })
    }

    /// Converts the model into its wire mapping, leaving out unset fields.
    fn to_params(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Short JSON type name for diagnostics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
