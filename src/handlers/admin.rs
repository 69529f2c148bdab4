// src/handlers/admin.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::AppError, extract::ValidatedJson},
    config::AppState,
    middleware::rbac::{RequireRole, SuperAdminOnly},
    models::{
        agency::{AgencyList, AgencyResponse, CreateAgencyPayload},
        analytics::PlatformAnalytics,
    },
};

#[utoipa::path(
    post,
    path = "/api/admin/agencies",
    tag = "Admin",
    request_body = CreateAgencyPayload,
    responses(
        (status = 201, description = "Agency created", body = AgencyResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not a super-admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_agency(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdminOnly>,
    ValidatedJson(payload): ValidatedJson<CreateAgencyPayload>,
) -> Result<impl IntoResponse, AppError> {
    let agency = app_state.agency_service.create_agency(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AgencyResponse {
            message: "Agency created successfully".to_string(),
            agency,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/agencies",
    tag = "Admin",
    responses(
        (status = 200, description = "Every agency, newest first", body = AgencyList),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not a super-admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_agencies(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let agencies = app_state.agency_service.list_agencies().await?;
    Ok(Json(AgencyList { agencies }))
}

#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = "Admin",
    responses(
        (status = 200, description = "Platform counters", body = PlatformAnalytics),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not a super-admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_analytics(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.analytics_service.platform_summary().await?;
    Ok(Json(summary))
}
