//
//  booker-client
//  models/location.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Business locations.
//!
//! Locations are produced by the API only; callers refer to them by
//! numeric ID when booking.

use serde::{Deserialize, Serialize};

use super::{Address, Model};

/// A business location registered with Booker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    /// Location identifier, the `LocationID` of booking requests
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_site: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_distribution_partner: Option<bool>,

    #[serde(rename = "EncryptedLocationID", default, skip_serializing_if = "Option::is_none")]
    pub encrypted_location_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_account_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Model for Location {
    const NAME: &'static str = "Location";
}

impl Location {
    /// Business name, falling back to the account name.
    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .or(self.account_name.as_deref())
            .unwrap_or("")
    }
}

/// Category of business a location belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessType {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Model for BusinessType {
    const NAME: &'static str = "BusinessType";
}

/// Time zone a location operates in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZone {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_name: Option<String>,
}

impl Model for TimeZone {
    const NAME: &'static str = "TimeZone";
}
