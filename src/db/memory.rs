// src/db/memory.rs

//! In-process store used for local runs (`STORE_BACKEND=memory`) and tests.
//! Contents are lost when the process exits.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::store::{AgencyStore, BookingStore, CarStore, Stores, UserStore},
    models::{
        agency::{Agency, AgencyStatus},
        auth::{Role, User},
        booking::Booking,
        car::{Car, CarStatus},
    },
};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    agencies: RwLock<Vec<Agency>>,
    cars: RwLock<Vec<Car>>,
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stores {
    /// All four collections backed by one fresh `MemoryStore`.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            agencies: store.clone(),
            cars: store.clone(),
            bookings: store,
        }
    }
}

// Newest first, matching the ORDER BY of the Postgres repositories.
fn newest_first<T>(
    items: impl Iterator<Item = T>,
    created: impl Fn(&T) -> chrono::DateTime<chrono::Utc>,
) -> Vec<T> {
    let mut out: Vec<T> = items.collect();
    out.sort_by_key(|item| std::cmp::Reverse(created(item)));
    out
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn count_by_role(&self, role: Role) -> Result<i64, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| u.role == role).count() as i64)
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::EmailAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl AgencyStore for MemoryStore {
    async fn find_by_id(&self, agency_id: Uuid) -> Result<Option<Agency>, AppError> {
        let agencies = self.agencies.read().await;
        Ok(agencies.iter().find(|a| a.agency_id == agency_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Agency>, AppError> {
        let agencies = self.agencies.read().await;
        Ok(newest_first(agencies.iter().cloned(), |a| a.created_at))
    }

    async fn insert(&self, agency: &Agency) -> Result<(), AppError> {
        self.agencies.write().await.push(agency.clone());
        Ok(())
    }

    async fn count(&self, status: Option<AgencyStatus>) -> Result<i64, AppError> {
        let agencies = self.agencies.read().await;
        let total = agencies
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count();
        Ok(total as i64)
    }
}

#[async_trait]
impl CarStore for MemoryStore {
    async fn find_by_id(&self, car_id: Uuid) -> Result<Option<Car>, AppError> {
        let cars = self.cars.read().await;
        Ok(cars.iter().find(|c| c.car_id == car_id).cloned())
    }

    async fn list_by_agency(
        &self,
        agency_id: Uuid,
        status: Option<CarStatus>,
    ) -> Result<Vec<Car>, AppError> {
        let cars = self.cars.read().await;
        let matching = cars
            .iter()
            .filter(|c| c.agency_id == agency_id)
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned();
        Ok(newest_first(matching, |c| c.created_at))
    }

    async fn insert(&self, car: &Car) -> Result<(), AppError> {
        self.cars.write().await.push(car.clone());
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.cars.read().await.len() as i64)
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn list_by_agency(&self, agency_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        let matching = bookings
            .iter()
            .filter(|b| b.agency_id == agency_id)
            .cloned();
        Ok(newest_first(matching, |b| b.created_at))
    }

    async fn insert(&self, booking: &Booking) -> Result<(), AppError> {
        self.bookings.write().await.push(booking.clone());
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.bookings.read().await.len() as i64)
    }
}
