//
//  booker-client
//  cli/appointment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Class booking.
//!
//! The customer is described either with flags or with a JSON file holding a
//! Booker customer object (`--customer-file`); flags override file values.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde_json::Value;

use crate::models::{Appointment, Customer, Model};
use crate::output::{format_status, print_field, OutputFormat, TableOutput};
use crate::util::format_time;

use super::{extras, parse_param, GlobalOptions};

#[derive(Args, Debug)]
pub struct BookClassCommand {
    /// Booker location ID
    #[arg(long, short = 'l')]
    pub location: i64,

    /// Class instance ID from `booker availability`
    #[arg(long, short = 'c')]
    pub class_instance: i64,

    /// JSON file with the customer record
    #[arg(long)]
    pub customer_file: Option<PathBuf>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Ask Booker to email the confirmation
    #[arg(long)]
    pub send_email: bool,

    /// Extra request parameter as KEY=VALUE (repeatable)
    #[arg(long = "param", short = 'P', value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,
}

impl BookClassCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let customer = self.customer()?;
        let client = global.client()?;

        let appointment = client
            .create_class_appointment(
                self.location,
                self.class_instance,
                &customer,
                extras(&self.params),
            )
            .await?;

        let writer = global.writer();
        if writer.format() == OutputFormat::Table {
            writer.write_success(&format!(
                "Booked class instance {} at location {}",
                self.class_instance, self.location
            ));
        }
        writer.write(&appointment)
    }

    fn customer(&self) -> Result<Customer> {
        let mut customer = match &self.customer_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let value: Value = serde_json::from_str(&content)
                    .with_context(|| format!("{} is not valid JSON", path.display()))?;
                Customer::from_value(value)?
            }
            None => Customer::default(),
        };

        if let Some(first_name) = &self.first_name {
            customer.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            customer.last_name = Some(last_name.clone());
        }
        if let Some(email) = &self.email {
            customer.email = Some(email.clone());
        }
        if let Some(phone) = &self.phone {
            customer.mobile_phone = Some(phone.clone());
        }
        if self.send_email {
            customer.send_email = Some(true);
        }

        if customer.first_name.is_none() && customer.last_name.is_none() && customer.id.is_none() {
            anyhow::bail!("a customer needs a name or an ID (use --first-name/--last-name or --customer-file)");
        }
        Ok(customer)
    }
}

impl TableOutput for Appointment {
    fn print_table(&self, color: bool) {
        let heading = match &self.booking_number {
            Some(number) => format!("Appointment {number}"),
            None => "Appointment".to_string(),
        };
        if color {
            println!("{}", style(heading).cyan().bold());
        } else {
            println!("{}", heading);
        }
        println!();

        if let Some(id) = self.id {
            print_field("ID", &id.to_string(), color);
        }
        if let Some(status) = self.status.as_ref().and_then(|s| s.name.as_deref()) {
            print_field("Status", &format_status(status, color), color);
        }
        if let Some(customer) = &self.customer {
            print_field("Customer", &customer.full_name(), color);
        }
        print_field("Starts", &format_time(self.start_date_time), color);
        print_field("Ends", &format_time(self.end_date_time), color);
        if let Some(total) = &self.final_total {
            print_field("Total", &total.display(), color);
        }
    }
}
