//
//  booker-client
//  models/customer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Booking customers.
//!
//! Callers construct a [`Customer`] to create appointments; the API also
//! returns one nested in each [`Appointment`](super::Appointment).
//!
//! ```rust
//! use booker_client::models::{Address, Customer};
//!
//! let customer = Customer {
//!     first_name: Some("Aaron".into()),
//!     last_name: Some("Severs".into()),
//!     email: Some("testasevers@example.com".into()),
//!     address: Some(Address {
//!         zip: Some("94105".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! assert_eq!(customer.full_name(), "Aaron Severs");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Address, Model};

/// A customer making a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_phone: Option<String>,

    #[serde(
        default,
        with = "crate::date::wire::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<DateTime<Utc>>,

    #[serde(rename = "GenderID", default, skip_serializing_if = "Option::is_none")]
    pub gender_id: Option<i64>,

    /// Whether Booker should email the customer about the booking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Model for Customer {
    const NAME: &'static str = "Customer";
}

impl Customer {
    /// First and last name joined by a space, skipping whichever is unset.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
