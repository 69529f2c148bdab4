// src/models/car.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::validate::{validate_not_blank, validate_price},
    models::agency::Agency,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "car_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CarStatus {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Car {
    pub car_id: Uuid,
    pub title: String,
    pub model: String,
    pub brand: String,
    pub year: i32,
    pub plate_number: String,
    pub color: String,
    #[schema(value_type = f64)]
    pub price_per_day: Decimal,
    pub features: Vec<String>,
    pub agency_id: Uuid,
    pub status: CarStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCarPayload {
    #[validate(custom(function = "validate_not_blank", message = "The title is required."))]
    pub title: String,
    #[validate(custom(function = "validate_not_blank", message = "The model is required."))]
    pub model: String,
    #[validate(custom(function = "validate_not_blank", message = "The brand is required."))]
    pub brand: String,
    #[validate(range(min = 1900, max = 2100, message = "The year must be between 1900 and 2100."))]
    pub year: i32,
    #[validate(custom(function = "validate_not_blank", message = "The plate number is required."))]
    pub plate_number: String,
    #[validate(custom(function = "validate_not_blank", message = "The color is required."))]
    pub color: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64)]
    pub price_per_day: Decimal,
    #[serde(default)]
    pub features: Vec<String>,
    pub agency_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CarResponse {
    pub message: String,
    pub car: Car,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CarList {
    pub cars: Vec<Car>,
}

/// Public catalogue of an agency: its available cars plus the agency itself,
/// which is `null` when the id does not match any agency.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicCarsResponse {
    pub agency: Option<Agency>,
    pub cars: Vec<Car>,
}
