//
//  booker-client
//  date.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Booker Wire Dates
//!
//! The Booker API exchanges every date and time value as a string of the form
//! `/Date(<milliseconds since the Unix epoch, UTC>)/`. Responses may carry a
//! trailing zone offset (`/Date(1438776000000-0400)/`); the millisecond count
//! is UTC either way, so the offset is accepted and ignored.
//!
//! ## Example
//!
//! ```rust
//! use booker_client::date;
//! use chrono::{DateTime, FixedOffset};
//!
//! let t: DateTime<FixedOffset> =
//!     DateTime::parse_from_rfc3339("2015-08-07T00:00:00-04:00").unwrap();
//! assert_eq!(date::encode(&t), "/Date(1438934400000)/");
//!
//! let back = date::decode("/Date(1438934400000)/").unwrap();
//! assert_eq!(back, t);
//! ```
//!
//! Model fields typed as `DateTime<Utc>` go through the [`wire`] serde
//! adapter so they never leave or enter the crate in any other shape.

use std::cell::RefCell;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::common::BookerError;

static WIRE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/Date\((-?\d+)(?:[+-]\d{4})?\)/$").expect("wire date pattern is valid")
});

/// Encodes an instant as a Booker wire date.
///
/// The result depends only on the instant, never on the zone it is expressed
/// in. Sub-millisecond precision is truncated.
pub fn encode<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    format!("/Date({})/", timestamp.timestamp_millis())
}

/// Decodes a Booker wire date into a UTC instant.
///
/// # Errors
///
/// Returns [`BookerError::Format`] when the string does not match
/// `/Date(<digits>)/` (optionally with a `±hhmm` suffix) or the millisecond
/// count is outside the representable range.
pub fn decode(value: &str) -> Result<DateTime<Utc>, BookerError> {
    let captures = WIRE_DATE
        .captures(value.trim())
        .ok_or_else(|| BookerError::Format(format!("not a Booker date: {value:?}")))?;

    let millis: i64 = captures[1]
        .parse()
        .map_err(|_| BookerError::Format(format!("millisecond count out of range: {value:?}")))?;

    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| BookerError::Format(format!("timestamp out of range: {value:?}")))
}

thread_local! {
    // Last decode failure seen by the serde adapters on this thread. serde
    // flattens custom errors to text, so the model mapper reads this back to
    // report a `Format` error instead of a `Mapping` one.
    static FIELD_FAILURE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Decodes a wire date inside a serde adapter, remembering any failure.
fn decode_field(raw: &str) -> Result<DateTime<Utc>, BookerError> {
    decode(raw).inspect_err(|e| {
        if let BookerError::Format(message) = e {
            FIELD_FAILURE.with(|f| *f.borrow_mut() = Some(message.clone()));
        }
    })
}

/// Forgets any decode failure recorded on this thread.
pub(crate) fn clear_field_failure() {
    FIELD_FAILURE.with(|f| f.borrow_mut().take());
}

/// Takes the decode failure recorded on this thread, if any.
pub(crate) fn take_field_failure() -> Option<BookerError> {
    FIELD_FAILURE
        .with(|f| f.borrow_mut().take())
        .map(BookerError::Format)
}

/// Serde adapter for `DateTime<Utc>` fields carried as wire dates.
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Slot {
///     #[serde(with = "booker_client::date::wire")]
///     start: DateTime<Utc>,
/// }
/// ```
pub mod wire {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::decode_field(&raw).map_err(de::Error::custom)
    }

    /// The same adapter for `Option<DateTime<Utc>>`; `null` maps to `None`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(t) => serializer.serialize_str(&super::super::encode(t)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::super::decode_field(&raw).map(Some).map_err(de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn encodes_start_of_day_in_eastern_time() {
        let t = DateTime::parse_from_rfc3339("2015-08-07T00:00:00-04:00").unwrap();
        assert_eq!(encode(&t), "/Date(1438934400000)/");
    }

    #[test]
    fn encodes_end_of_day_in_eastern_time() {
        let t = DateTime::parse_from_rfc3339("2015-08-07T23:59:59-04:00").unwrap();
        assert_eq!(encode(&t), "/Date(1439020799000)/");
    }

    #[test]
    fn encoding_ignores_zone() {
        let eastern = FixedOffset::west_opt(4 * 3600)
            .unwrap()
            .with_ymd_and_hms(2015, 8, 7, 0, 0, 0)
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2015, 8, 7, 4, 0, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2015, 8, 7, 13, 0, 0)
            .unwrap();

        assert_eq!(encode(&eastern), encode(&utc));
        assert_eq!(encode(&utc), encode(&tokyo));
    }

    #[test]
    fn encoding_truncates_sub_millisecond_precision() {
        let t = DateTime::parse_from_rfc3339("2015-08-07T00:00:00.123999-04:00").unwrap();
        assert_eq!(encode(&t), "/Date(1438934400123)/");
    }

    #[test]
    fn decode_inverts_encode() {
        let t = Utc.timestamp_millis_opt(1438776000123).unwrap();
        assert_eq!(decode(&encode(&t)).unwrap(), t);

        let before_epoch = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap();
        assert_eq!(decode(&encode(&before_epoch)).unwrap(), before_epoch);
    }

    #[test]
    fn decode_accepts_zone_suffix() {
        let t = decode("/Date(1438776000000-0400)/").unwrap();
        assert_eq!(t.timestamp_millis(), 1438776000000);

        let t = decode("/Date(1438776000000+0200)/").unwrap();
        assert_eq!(t.timestamp_millis(), 1438776000000);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        for bad in [
            "",
            "1438776000000",
            "/Date()/",
            "/Date(abc)/",
            "Date(1438776000000)",
            "/Date(1438776000000)",
            "2015-08-07T00:00:00Z",
        ] {
            let err = decode(bad).unwrap_err();
            assert!(matches!(err, BookerError::Format(_)), "{bad:?} should be a format error");
        }
    }

    #[test]
    fn wire_adapter_round_trips_through_json() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Slot {
            #[serde(with = "wire")]
            start: DateTime<Utc>,
            #[serde(default, with = "wire::option", skip_serializing_if = "Option::is_none")]
            end: Option<DateTime<Utc>>,
        }

        let slot = Slot {
            start: Utc.timestamp_millis_opt(1438776000000).unwrap(),
            end: None,
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json, serde_json::json!({"start": "/Date(1438776000000)/"}));

        let back: Slot = serde_json::from_value(json).unwrap();
        assert_eq!(back, slot);

        let bad = serde_json::from_value::<Slot>(serde_json::json!({"start": "yesterday"}));
        assert!(bad.is_err());
    }

    #[test]
    fn adapter_failure_is_recorded_once() {
        clear_field_failure();
        #[derive(serde::Deserialize, Debug)]
        struct Slot {
            #[serde(with = "wire")]
            _start: DateTime<Utc>,
        }

        let bad = serde_json::from_value::<Slot>(serde_json::json!({"_start": "yesterday"}));
        assert!(bad.is_err());
        assert!(matches!(take_field_failure(), Some(BookerError::Format(_))));
        assert!(take_field_failure().is_none());
    }
}
