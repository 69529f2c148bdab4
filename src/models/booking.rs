// src/models/booking.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::validate::validate_not_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub booking_id: Uuid,
    pub car_id: Uuid,
    pub agency_id: Uuid,
    pub client_email: String,
    pub client_name: String,
    pub client_phone: String,
    pub pickup_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub pickup_location: String,
    pub return_location: String,
    pub message: Option<String>,
    pub status: BookingStatus,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Parses a booking date. Accepts RFC 3339 timestamps, naive timestamps
/// (read as UTC) and plain calendar dates (midnight UTC).
pub fn parse_booking_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_booking_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_booking_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingPayload {
    pub car_id: Uuid,
    #[validate(email(message = "The email address is invalid."))]
    pub client_email: String,
    #[validate(custom(function = "validate_not_blank", message = "The client name is required."))]
    pub client_name: String,
    #[validate(custom(function = "validate_not_blank", message = "The client phone is required."))]
    pub client_phone: String,
    #[serde(deserialize_with = "deserialize_booking_date")]
    #[schema(value_type = String, format = DateTime)]
    pub pickup_date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_booking_date")]
    #[schema(value_type = String, format = DateTime)]
    pub return_date: DateTime<Utc>,
    #[validate(custom(function = "validate_not_blank", message = "The pickup location is required."))]
    pub pickup_location: String,
    #[validate(custom(function = "validate_not_blank", message = "The return location is required."))]
    pub return_location: String,
    pub message: Option<String>,
}

impl CreateBookingPayload {
    // The rental window may be empty but never reversed.
    pub fn validate_window(&self) -> Result<(), ValidationErrors> {
        if self.return_date < self.pickup_date {
            let mut err = ValidationError::new("return_before_pickup");
            err.message = Some("The return date cannot be before the pickup date.".into());
            let mut errors = ValidationErrors::new();
            errors.add("return_date", err);
            return Err(errors);
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub message: String,
    pub booking: Booking,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}
