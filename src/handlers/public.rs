// src/handlers/public.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        extract::{AppPath, ValidatedJson},
    },
    config::AppState,
    models::{
        booking::{BookingResponse, CreateBookingPayload},
        car::PublicCarsResponse,
    },
};

#[utoipa::path(
    get,
    path = "/api/public/agencies/{agency_id}/cars",
    tag = "Public",
    params(("agency_id" = Uuid, Path, description = "Agency id")),
    responses(
        (status = 200, description = "Available cars and the agency (null if unknown)", body = PublicCarsResponse)
    )
)]
pub async fn list_public_cars(
    State(app_state): State<AppState>,
    AppPath(agency_id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (agency, cars) = app_state.fleet_service.public_catalogue(agency_id).await?;
    Ok(Json(PublicCarsResponse { agency, cars }))
}

#[utoipa::path(
    post,
    path = "/api/public/bookings",
    tag = "Public",
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Booking request recorded", body = BookingResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Car not found")
    )
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate_window()?;

    let booking = app_state.booking_service.create_booking(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Booking created successfully".to_string(),
            booking,
        }),
    ))
}
