// src/handlers/agency.rs

//! Staff-facing routes. Every one is scoped to a single agency: the role set
//! is checked by `RequireRole<AgencyStaff>`, then the target agency against the
//! caller's own.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        extract::{AppPath, ValidatedJson},
    },
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{AgencyStaff, RequireRole},
    },
    models::{
        booking::BookingList,
        car::{CarList, CarResponse, CreateCarPayload},
    },
    services::access::ensure_tenant,
};

#[utoipa::path(
    post,
    path = "/api/agency/cars",
    tag = "Agency",
    request_body = CreateCarPayload,
    responses(
        (status = 201, description = "Car added", body = CarResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role or agency mismatch"),
        (status = 404, description = "Agency not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_car(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    _guard: RequireRole<AgencyStaff>,
    ValidatedJson(payload): ValidatedJson<CreateCarPayload>,
) -> Result<impl IntoResponse, AppError> {
    ensure_tenant(&user, payload.agency_id)?;

    let car = app_state.fleet_service.create_car(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CarResponse {
            message: "Car added successfully".to_string(),
            car,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/agency/{agency_id}/cars",
    tag = "Agency",
    params(("agency_id" = Uuid, Path, description = "Agency id")),
    responses(
        (status = 200, description = "Every car of the agency", body = CarList),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role or agency mismatch")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_agency_cars(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    _guard: RequireRole<AgencyStaff>,
    AppPath(agency_id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    ensure_tenant(&user, agency_id)?;

    let cars = app_state.fleet_service.list_agency_cars(agency_id).await?;
    Ok(Json(CarList { cars }))
}

#[utoipa::path(
    get,
    path = "/api/agency/{agency_id}/bookings",
    tag = "Agency",
    params(("agency_id" = Uuid, Path, description = "Agency id")),
    responses(
        (status = 200, description = "Every booking of the agency", body = BookingList),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role or agency mismatch")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_agency_bookings(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    _guard: RequireRole<AgencyStaff>,
    AppPath(agency_id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    ensure_tenant(&user, agency_id)?;

    let bookings = app_state
        .booking_service
        .list_agency_bookings(agency_id)
        .await?;
    Ok(Json(BookingList { bookings }))
}
