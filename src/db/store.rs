// src/db/store.rs

//! One trait per collection. Every method is a single independent read or
//! write; there are no transactions across calls.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        agency::{Agency, AgencyStatus},
        auth::{Role, User},
        booking::Booking,
        car::{Car, CarStatus},
    },
};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn count_by_role(&self, role: Role) -> Result<i64, AppError>;

    /// Fails with `AppError::EmailAlreadyExists` when the email is taken.
    async fn insert(&self, user: &User) -> Result<(), AppError>;
}

#[async_trait]
pub trait AgencyStore: Send + Sync {
    async fn find_by_id(&self, agency_id: Uuid) -> Result<Option<Agency>, AppError>;

    /// All agencies, newest first.
    async fn list_all(&self) -> Result<Vec<Agency>, AppError>;

    async fn insert(&self, agency: &Agency) -> Result<(), AppError>;

    async fn count(&self, status: Option<AgencyStatus>) -> Result<i64, AppError>;
}

#[async_trait]
pub trait CarStore: Send + Sync {
    async fn find_by_id(&self, car_id: Uuid) -> Result<Option<Car>, AppError>;

    /// Cars of one agency, optionally narrowed to a status, newest first.
    async fn list_by_agency(
        &self,
        agency_id: Uuid,
        status: Option<CarStatus>,
    ) -> Result<Vec<Car>, AppError>;

    async fn insert(&self, car: &Car) -> Result<(), AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Bookings of one agency, newest first.
    async fn list_by_agency(&self, agency_id: Uuid) -> Result<Vec<Booking>, AppError>;

    async fn insert(&self, booking: &Booking) -> Result<(), AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

/// The four collections, shared by every request handler.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub agencies: Arc<dyn AgencyStore>,
    pub cars: Arc<dyn CarStore>,
    pub bookings: Arc<dyn BookingStore>,
}
