//
//  booker-client
//  models/available_time.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bookable treatment slots and the money value they carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Model;

/// Amount of money in a given currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// ISO 4217 code, e.g. `USD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Model for CurrentPrice {
    const NAME: &'static str = "CurrentPrice";
}

impl CurrentPrice {
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency_code: Some(currency_code.into()),
        }
    }

    /// `"125.00 USD"`, or an empty string when no amount is set.
    pub fn display(&self) -> String {
        match (self.amount, self.currency_code.as_deref()) {
            (Some(amount), Some(code)) => format!("{amount:.2} {code}"),
            (Some(amount), None) => format!("{amount:.2}"),
            _ => String::new(),
        }
    }
}

/// A slot in which a treatment can be booked with a given employee.
///
/// Returned by availability searches and passed back unchanged as the
/// treatment time slot of [`create_appointment`](crate::BookerClient::create_appointment).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<CurrentPrice>,

    /// Length of the slot in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(rename = "EmployeeID", default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,

    #[serde(
        default,
        with = "crate::date::wire::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date_time: Option<DateTime<Utc>>,

    #[serde(rename = "TreatmentID", default, skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<i64>,
}

impl Model for AvailableTime {
    const NAME: &'static str = "AvailableTime";
}
