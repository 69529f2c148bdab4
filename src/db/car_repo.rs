// src/db/car_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::store::CarStore,
    models::car::{Car, CarStatus},
};

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for CarRepository {
    async fn find_by_id(&self, car_id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE car_id = $1")
            .bind(car_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(car)
    }

    async fn list_by_agency(
        &self,
        agency_id: Uuid,
        status: Option<CarStatus>,
    ) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT * FROM cars
            WHERE agency_id = $1
              AND ($2::car_status IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(agency_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(cars)
    }

    async fn insert(&self, car: &Car) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO cars
                (car_id, title, model, brand, year, plate_number, color,
                 price_per_day, features, agency_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(car.car_id)
        .bind(&car.title)
        .bind(&car.model)
        .bind(&car.brand)
        .bind(car.year)
        .bind(&car.plate_number)
        .bind(&car.color)
        .bind(car.price_per_day)
        .bind(&car.features)
        .bind(car.agency_id)
        .bind(car.status)
        .bind(car.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
