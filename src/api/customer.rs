//
//  booker-client
//  api/customer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Customer API
//!
//! Booking operations of the Booker customer service.
//!
//! Each operation comes in two halves:
//!
//! - a pure builder (`create_appointment`, `run_class_availability`, ...) that
//!   turns arguments into an [`ApiRequest`] without touching the network
//! - an async method on [`BookerClient`] that executes that request
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Returns |
//! |-----------|--------|------|---------|
//! | `create_appointment` | POST | `/appointment/create` | [`Appointment`] |
//! | `create_class_appointment` | POST | `/class_appointment/create` | [`Appointment`] |
//! | `run_class_availability` | POST | `/availability/class` | `Vec<`[`ClassInstance`]`>` |
//! | `get_location` | GET | `/location/<id>` | [`Location`] |
//!
//! ## Extras
//!
//! The POST operations accept an `extras` mapping that is laid over the
//! built parameters. A key in `extras` replaces a built key of the same name,
//! including the `OnlyIfAvailable` and `ExcludeClosedDates` defaults of the
//! availability search. `access_token` is always added last.

use chrono::{DateTime, TimeZone};
use serde_json::{json, Value};

use super::client::BookerClient;
use super::common::BookerError;
use super::request::{ApiRequest, Params};
use crate::date;
use crate::models::{Appointment, AvailableTime, ClassInstance, Customer, Location, Model};

pub const CREATE_APPOINTMENT_PATH: &str = "/appointment/create";
pub const CREATE_CLASS_APPOINTMENT_PATH: &str = "/class_appointment/create";
pub const CLASS_AVAILABILITY_PATH: &str = "/availability/class";

/// Path of a single location.
pub fn location_path(location_id: i64) -> String {
    format!("/location/{location_id}")
}

/// Builds the request that books a treatment slot.
///
/// The slot is sent as the only treatment time slot of a one-entry itinerary:
///
/// ```json
/// {
///   "LocationID": 10257,
///   "ItineraryTimeSlotList": [{"TreatmentTimeSlots": [{...available time...}]}],
///   "Customer": {...}
/// }
/// ```
pub fn create_appointment(
    location_id: i64,
    available_time: &AvailableTime,
    customer: &Customer,
    extras: Params,
) -> ApiRequest<Appointment> {
    let itinerary = json!([{
        "TreatmentTimeSlots": [Value::Object(available_time.to_params())]
    }]);

    let params = Params::new()
        .with("LocationID", location_id)
        .with("ItineraryTimeSlotList", itinerary)
        .with_model("Customer", customer);

    ApiRequest::post(CREATE_APPOINTMENT_PATH, params).with_extras(extras)
}

/// Builds the request that books a seat in a class instance.
pub fn create_class_appointment(
    location_id: i64,
    class_instance_id: i64,
    customer: &Customer,
    extras: Params,
) -> ApiRequest<Appointment> {
    let params = Params::new()
        .with("LocationID", location_id)
        .with("ClassInstanceID", class_instance_id)
        .with_model("Customer", customer);

    ApiRequest::post(CREATE_CLASS_APPOINTMENT_PATH, params).with_extras(extras)
}

/// Builds the class availability search for `[from, to]`.
///
/// Both bounds are sent as wire dates, so the zone of the arguments does not
/// matter. Only classes with openings are requested and closed dates are
/// skipped unless `extras` says otherwise.
pub fn run_class_availability<Tz1: TimeZone, Tz2: TimeZone>(
    location_id: i64,
    from: &DateTime<Tz1>,
    to: &DateTime<Tz2>,
    extras: Params,
) -> ApiRequest<ClassInstance> {
    let params = Params::new()
        .with("FromStartDateTime", date::encode(from))
        .with("LocationID", location_id)
        .with("OnlyIfAvailable", true)
        .with("ToStartDateTime", date::encode(to))
        .with("ExcludeClosedDates", true);

    ApiRequest::post(CLASS_AVAILABILITY_PATH, params).with_extras(extras)
}

/// Builds the lookup of a single location.
pub fn get_location(location_id: i64) -> ApiRequest<Location> {
    ApiRequest::get(location_path(location_id), Params::new())
}

impl BookerClient {
    /// Books `available_time` at a location for `customer`.
    ///
    /// # Parameters
    ///
    /// * `location_id` - Booker location identifier
    /// * `available_time` - Slot returned by an availability search
    /// * `customer` - The person the appointment is for
    /// * `extras` - Additional parameters; these win over built keys
    ///
    /// # Returns
    ///
    /// The created [`Appointment`].
    ///
    /// # Errors
    ///
    /// - [`BookerError::Authentication`] if no token could be obtained
    /// - [`BookerError::Transport`] if the call fails or Booker rejects it
    /// - [`BookerError::Mapping`] if the response is not an appointment
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use booker_client::api::Params;
    /// use booker_client::models::{AvailableTime, Customer};
    /// # async fn example(client: booker_client::BookerClient, slot: AvailableTime) -> Result<(), booker_client::BookerError> {
    /// let customer = Customer {
    ///     first_name: Some("Aaron".into()),
    ///     last_name: Some("Severs".into()),
    ///     ..Default::default()
    /// };
    /// let appointment = client.create_appointment(10257, &slot, &customer, Params::new()).await?;
    /// println!("Booked {:?}", appointment.booking_number);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_appointment(
        &self,
        location_id: i64,
        available_time: &AvailableTime,
        customer: &Customer,
        extras: Params,
    ) -> Result<Appointment, BookerError> {
        let request = create_appointment(location_id, available_time, customer, extras);
        self.execute(request).await?.into_one()
    }

    /// Books `customer` into the class instance `class_instance_id`.
    ///
    /// Errors as for [`create_appointment`](Self::create_appointment).
    pub async fn create_class_appointment(
        &self,
        location_id: i64,
        class_instance_id: i64,
        customer: &Customer,
        extras: Params,
    ) -> Result<Appointment, BookerError> {
        let request = create_class_appointment(location_id, class_instance_id, customer, extras);
        self.execute(request).await?.into_one()
    }

    /// Lists the class instances at a location starting between `from` and
    /// `to`.
    ///
    /// An empty list is a successful answer.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use booker_client::api::Params;
    /// use chrono::{Duration, Utc};
    /// # async fn example(client: booker_client::BookerClient) -> Result<(), booker_client::BookerError> {
    /// let from = Utc::now();
    /// let classes = client
    ///     .run_class_availability(10257, &from, &(from + Duration::days(1)), Params::new())
    ///     .await?;
    /// for class in classes.iter().filter(|c| c.has_openings()) {
    ///     println!("{:?}", class.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_class_availability<Tz1: TimeZone, Tz2: TimeZone>(
        &self,
        location_id: i64,
        from: &DateTime<Tz1>,
        to: &DateTime<Tz2>,
        extras: Params,
    ) -> Result<Vec<ClassInstance>, BookerError> {
        let request = run_class_availability(location_id, from, to, extras);
        Ok(self.execute(request).await?.into_many())
    }

    /// Fetches a location by identifier.
    pub async fn get_location(&self, location_id: i64) -> Result<Location, BookerError> {
        self.execute(get_location(location_id)).await?.into_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::HttpMethod;
    use crate::api::testing::{client_with, FailingAuth, RecordingTransport};
    use crate::models::{Address, CurrentPrice};
    use chrono::{FixedOffset, NaiveDate, Utc};
    use std::sync::Arc;

    fn available_time() -> AvailableTime {
        AvailableTime {
            current_price: Some(CurrentPrice::new(125.0, "USD")),
            duration: Some(60),
            employee_id: Some(107269),
            start_date_time: Some(date::decode("/Date(1438776000000)/").unwrap()),
            treatment_id: Some(560069),
        }
    }

    fn customer() -> Customer {
        Customer {
            address: Some(Address {
                street1: Some("680 Mission St".into()),
                street2: Some("Apt 123".into()),
                city: Some("San Francisco".into()),
                state: Some("CA".into()),
                zip: Some("94105".into()),
                country: None,
            }),
            date_of_birth: Some(
                NaiveDate::from_ymd_opt(1982, 1, 21)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    .and_utc(),
            ),
            email: Some("testasevers@example.com".into()),
            first_name: Some("Aaron".into()),
            last_name: Some("Severs".into()),
            gender_id: Some(1),
            mobile_phone: Some("555-555-5555".into()),
            send_email: Some(true),
            ..Default::default()
        }
    }

    fn customer_json() -> Value {
        json!({
            "FirstName": "Aaron",
            "LastName": "Severs",
            "Email": "testasevers@example.com",
            "MobilePhone": "555-555-5555",
            "DateOfBirth": "/Date(380419200000)/",
            "GenderID": 1,
            "SendEmail": true,
            "Address": {
                "Street1": "680 Mission St",
                "Street2": "Apt 123",
                "City": "San Francisco",
                "State": "CA",
                "Zip": "94105"
            }
        })
    }

    fn eastern(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::west_opt(4 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
    }

    #[test]
    fn create_appointment_wraps_slot_in_single_itinerary_entry() {
        let request = create_appointment(10257, &available_time(), &customer(), Params::new());

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/appointment/create");
        assert_eq!(
            Value::Object(request.params.into_inner()),
            json!({
                "LocationID": 10257,
                "ItineraryTimeSlotList": [{
                    "TreatmentTimeSlots": [{
                        "CurrentPrice": {"Amount": 125.0, "CurrencyCode": "USD"},
                        "Duration": 60,
                        "EmployeeID": 107269,
                        "StartDateTime": "/Date(1438776000000)/",
                        "TreatmentID": 560069
                    }]
                }],
                "Customer": customer_json()
            })
        );
    }

    #[test]
    fn class_availability_encodes_bounds_and_defaults() {
        let request = run_class_availability(
            10257,
            &eastern(2015, 8, 7, 0, 0, 0),
            &eastern(2015, 8, 7, 23, 59, 59),
            Params::new(),
        );

        assert_eq!(request.path, "/availability/class");
        assert_eq!(
            Value::Object(request.params.into_inner()),
            json!({
                "FromStartDateTime": "/Date(1438934400000)/",
                "LocationID": 10257,
                "OnlyIfAvailable": true,
                "ToStartDateTime": "/Date(1439020799000)/",
                "ExcludeClosedDates": true
            })
        );
    }

    #[test]
    fn class_availability_bounds_ignore_the_zone() {
        let from = eastern(2015, 8, 7, 0, 0, 0);
        let to = eastern(2015, 8, 7, 23, 59, 59);
        let eastern_request = run_class_availability(1, &from, &to, Params::new());
        let utc_request = run_class_availability(
            1,
            &from.with_timezone(&Utc),
            &to.with_timezone(&Utc),
            Params::new(),
        );
        assert_eq!(eastern_request.params, utc_request.params);
    }

    #[test]
    fn class_availability_bounds_may_use_different_zones() {
        let from = eastern(2015, 8, 7, 0, 0, 0).with_timezone(&Utc);
        let to = eastern(2015, 8, 7, 23, 59, 59);
        let request = run_class_availability(1, &from, &to, Params::new());

        assert_eq!(request.params.get("FromStartDateTime"), Some(&json!("/Date(1438934400000)/")));
        assert_eq!(request.params.get("ToStartDateTime"), Some(&json!("/Date(1439020799000)/")));
    }

    #[test]
    fn extras_may_override_availability_defaults() {
        let request = run_class_availability(
            1,
            &eastern(2015, 8, 7, 0, 0, 0),
            &eastern(2015, 8, 8, 0, 0, 0),
            Params::new().with("OnlyIfAvailable", false),
        );
        assert_eq!(request.params.get("OnlyIfAvailable"), Some(&json!(false)));
        assert_eq!(request.params.get("ExcludeClosedDates"), Some(&json!(true)));
    }

    #[test]
    fn get_location_has_no_body_parameters() {
        let request = get_location(10257);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/location/10257");
        assert!(request.params.is_empty());
    }

    #[tokio::test]
    async fn create_appointment_posts_with_token_and_maps_result() {
        let transport = RecordingTransport::replying(json!({"ID": 9001, "BookingNumber": "B-9001"}));
        let client = client_with(transport.clone());

        let appointment = client
            .create_appointment(10257, &available_time(), &customer(), Params::new())
            .await
            .unwrap();

        assert_eq!(appointment.id, Some(9001));
        let call = transport.only_call();
        assert_eq!(call.path, "/appointment/create");
        assert_eq!(call.params["access_token"], "access_token");
        assert_eq!(call.params["LocationID"], 10257);
    }

    #[tokio::test]
    async fn create_appointment_passes_extras_through() {
        let transport = RecordingTransport::replying(json!({}));
        let client = client_with(transport.clone());

        client
            .create_appointment(
                10257,
                &available_time(),
                &customer(),
                Params::new().with("another_option", "foo"),
            )
            .await
            .unwrap();

        let params = transport.only_call().params;
        assert_eq!(params["another_option"], "foo");
        assert_eq!(params["access_token"], "access_token");
        assert_eq!(params.as_object().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn create_class_appointment_sends_exact_mapping() {
        let transport = RecordingTransport::replying(json!({"ID": 1}));
        let client = client_with(transport.clone());

        let appointment = client
            .create_class_appointment(10257, 3944336, &customer(), Params::new())
            .await
            .unwrap();

        assert_eq!(appointment.id, Some(1));
        let call = transport.only_call();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, "/class_appointment/create");
        assert_eq!(
            call.params,
            json!({
                "LocationID": 10257,
                "ClassInstanceID": 3944336,
                "Customer": customer_json(),
                "access_token": "access_token"
            })
        );
    }

    #[tokio::test]
    async fn create_class_appointment_adds_extras() {
        let transport = RecordingTransport::replying(json!({}));
        let client = client_with(transport.clone());

        client
            .create_class_appointment(
                10257,
                3944336,
                &customer(),
                Params::new().with("another_option", "foo"),
            )
            .await
            .unwrap();

        let params = transport.only_call().params;
        assert_eq!(params["another_option"], "foo");
        assert_eq!(params["ClassInstanceID"], 3944336);
    }

    #[tokio::test]
    async fn class_availability_empty_answer_is_empty_list() {
        let transport = RecordingTransport::replying(json!([]));
        let client = client_with(transport.clone());

        let classes = client
            .run_class_availability(
                10257,
                &eastern(2015, 8, 7, 0, 0, 0),
                &eastern(2015, 8, 7, 23, 59, 59),
                Params::new().with("another_option", "foo"),
            )
            .await
            .unwrap();

        assert!(classes.is_empty());
        assert_eq!(
            transport.only_call().params,
            json!({
                "FromStartDateTime": "/Date(1438934400000)/",
                "LocationID": 10257,
                "OnlyIfAvailable": true,
                "ToStartDateTime": "/Date(1439020799000)/",
                "ExcludeClosedDates": true,
                "another_option": "foo",
                "access_token": "access_token"
            })
        );
    }

    #[tokio::test]
    async fn class_availability_maps_each_instance() {
        let transport = RecordingTransport::replying(json!({
            "IsSuccess": true,
            "Results": [
                {"ID": 1, "Name": "Yoga", "RemainingCapacity": 3},
                {"ID": 2, "Name": "Pilates", "RemainingCapacity": 0}
            ]
        }));
        let client = client_with(transport);

        let from = Utc::now();
        let classes = client
            .run_class_availability(1, &from, &from, Params::new())
            .await
            .unwrap();

        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].name.as_deref(), Some("Yoga"));
        assert!(!classes[1].has_openings());
    }

    #[tokio::test]
    async fn get_location_sends_only_the_token() {
        let transport = RecordingTransport::replying(json!({"ID": 10257, "BusinessName": "Spa"}));
        let client = client_with(transport.clone());

        let location = client.get_location(10257).await.unwrap();

        assert_eq!(location.id, Some(10257));
        let call = transport.only_call();
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.params, json!({"access_token": "access_token"}));
    }

    #[tokio::test]
    async fn failed_authentication_sends_nothing() {
        let transport = RecordingTransport::replying(json!({}));
        let client = BookerClient::new(transport.clone(), Arc::new(FailingAuth));

        let err = client
            .create_class_appointment(10257, 3944336, &customer(), Params::new())
            .await
            .unwrap_err();

        assert!(matches!(err, BookerError::Authentication(_)));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn malformed_start_date_is_a_format_error() {
        let transport = RecordingTransport::replying(json!({
            "ID": 1,
            "StartDateTime": "2015-08-07T00:00:00Z"
        }));
        let client = client_with(transport);

        let err = client
            .create_class_appointment(10257, 3944336, &customer(), Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, BookerError::Format(_)), "{err:?}");
    }

    #[tokio::test]
    async fn list_answer_for_single_appointment_is_a_mapping_error() {
        let transport = RecordingTransport::replying(json!([{"ID": 1}, {"ID": 2}]));
        let client = client_with(transport);

        let err = client
            .create_class_appointment(1, 2, &customer(), Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, BookerError::Mapping(_)));
    }
}
