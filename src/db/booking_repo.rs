// src/db/booking_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, db::store::BookingStore, models::booking::Booking};

#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn list_by_agency(&self, agency_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE agency_id = $1 ORDER BY created_at DESC",
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    async fn insert(&self, booking: &Booking) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO bookings
                (booking_id, car_id, agency_id, client_email, client_name, client_phone,
                 pickup_date, return_date, pickup_location, return_location, message,
                 status, total_amount, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(booking.booking_id)
        .bind(booking.car_id)
        .bind(booking.agency_id)
        .bind(&booking.client_email)
        .bind(&booking.client_name)
        .bind(&booking.client_phone)
        .bind(booking.pickup_date)
        .bind(booking.return_date)
        .bind(&booking.pickup_location)
        .bind(&booking.return_location)
        .bind(&booking.message)
        .bind(booking.status)
        .bind(booking.total_amount)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
