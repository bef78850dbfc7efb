//
//  booker-client
//  cli/location.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Location lookup.

use anyhow::Result;
use clap::Args;

use crate::models::{Address, Location};
use crate::output::{print_field, print_header, TableOutput};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct LocationCommand {
    /// Booker location ID
    pub id: i64,
}

impl LocationCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let location = client.get_location(self.id).await?;
        global.writer().write(&location)
    }
}

fn format_address(address: &Address) -> String {
    let city_line = [address.city.as_deref(), address.state.as_deref(), address.zip.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    [
        address.street1.as_deref(),
        address.street2.as_deref(),
        Some(city_line.as_str()).filter(|s| !s.is_empty()),
        address.country.as_ref().and_then(|c| c.name.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

impl TableOutput for Location {
    fn print_table(&self, color: bool) {
        let name = match self.display_name() {
            "" => "Location",
            name => name,
        };
        print_header(name, color);

        if let Some(id) = self.id {
            print_field("ID", &id.to_string(), color);
        }
        if let Some(kind) = self.business_type.as_ref().and_then(|t| t.name.as_deref()) {
            print_field("Type", kind, color);
        }
        if let Some(address) = &self.address {
            print_field("Address", &format_address(address), color);
        }
        if let Some(phone) = &self.phone {
            print_field("Phone", phone, color);
        }
        if let Some(email) = &self.email_address {
            print_field("Email", email, color);
        }
        if let Some(site) = &self.web_site {
            print_field("Web", site, color);
        }
        if let Some(zone) = self.time_zone.as_ref().and_then(|z| z.name.as_deref()) {
            print_field("Time zone", zone, color);
        }
    }
}
