//
//  booker-client
//  models/class_instance.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CurrentPrice, Model};

/// One scheduled occurrence of a class, as returned by class availability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassInstance {
    /// Pass this as `class_instance_id` to book a spot
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "ClassID", default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,

    #[serde(rename = "LocationID", default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

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

    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_capacity: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<CurrentPrice>,
}

impl Model for ClassInstance {
    const NAME: &'static str = "ClassInstance";
}

impl ClassInstance {
    /// `true` when the class reports at least one open spot.
    pub fn has_openings(&self) -> bool {
        self.remaining_capacity.map_or(false, |n| n > 0)
    }
}
