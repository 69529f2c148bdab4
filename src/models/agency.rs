// src/models/agency.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validate::validate_not_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "agency_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AgencyStatus {
    Active,
    Suspended,
}

// A rental agency; the tenant every car and booking belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Agency {
    pub agency_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub description: Option<String>,
    pub status: AgencyStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAgencyPayload {
    #[validate(custom(function = "validate_not_blank", message = "The agency name is required."))]
    pub name: String,
    #[validate(email(message = "The email address is invalid."))]
    pub email: String,
    #[validate(custom(function = "validate_not_blank", message = "The phone number is required."))]
    pub phone: String,
    #[validate(custom(function = "validate_not_blank", message = "The address is required."))]
    pub address: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AgencyResponse {
    pub message: String,
    pub agency: Agency,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AgencyList {
    pub agencies: Vec<Agency>,
}
