// src/services/booking.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::{
    common::{error::AppError, validate::max_total_amount},
    db::{BookingStore, CarStore},
    models::booking::{Booking, BookingStatus, CreateBookingPayload},
};

/// Whole rental days between pickup and return; partial days are dropped.
pub fn rental_days(pickup: DateTime<Utc>, return_date: DateTime<Utc>) -> i64 {
    (return_date - pickup).num_days()
}

/// Price times whole days, or `None` when the product does not fit a stored total.
pub fn total_amount(
    price_per_day: Decimal,
    pickup: DateTime<Utc>,
    return_date: DateTime<Utc>,
) -> Option<Decimal> {
    price_per_day
        .checked_mul(Decimal::from(rental_days(pickup, return_date)))
        .filter(|total| *total <= max_total_amount())
}

fn total_too_large() -> AppError {
    let mut err = ValidationError::new("range");
    err.message = Some("The rental is too long for the price of this car.".into());
    let mut errors = ValidationErrors::new();
    errors.add("return_date", err);
    AppError::ValidationError(errors)
}

#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
    cars: Arc<dyn CarStore>,
}

impl BookingService {
    pub fn new(bookings: Arc<dyn BookingStore>, cars: Arc<dyn CarStore>) -> Self {
        Self { bookings, cars }
    }

    /// Public booking request. No availability or overlap check is made:
    /// overlapping bookings for the same car are all accepted.
    pub async fn create_booking(&self, payload: CreateBookingPayload) -> Result<Booking, AppError> {
        let car = self
            .cars
            .find_by_id(payload.car_id)
            .await?
            .ok_or(AppError::CarNotFound)?;

        let total = total_amount(car.price_per_day, payload.pickup_date, payload.return_date)
            .ok_or_else(total_too_large)?;

        let booking = Booking {
            booking_id: Uuid::new_v4(),
            car_id: car.car_id,
            agency_id: car.agency_id,
            client_email: payload.client_email,
            client_name: payload.client_name,
            client_phone: payload.client_phone,
            pickup_date: payload.pickup_date,
            return_date: payload.return_date,
            pickup_location: payload.pickup_location,
            return_location: payload.return_location,
            message: payload.message,
            status: BookingStatus::Pending,
            total_amount: total,
            created_at: Utc::now(),
        };

        self.bookings.insert(&booking).await?;
        tracing::info!(
            "Booking {} created for car {} (agency {})",
            booking.booking_id,
            booking.car_id,
            booking.agency_id
        );
        Ok(booking)
    }

    pub async fn list_agency_bookings(&self, agency_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.bookings.list_by_agency(agency_id).await
    }
}
