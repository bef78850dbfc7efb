//
//  booker-client
//  models/appointment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CurrentPrice, Customer, Model};

/// Result of a booking operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Appointment {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Confirmation number shown to the customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_number: Option<String>,

    #[serde(rename = "LocationID", default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(
        default,
        with = "crate::date::wire::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date_time: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "crate::date::wire::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_total: Option<CurrentPrice>,
}

impl Model for Appointment {
    const NAME: &'static str = "Appointment";
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppointmentStatus {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Model for AppointmentStatus {
    const NAME: &'static str = "AppointmentStatus";
}
