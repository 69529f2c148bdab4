use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    ValidationError(#[from] validator::ValidationErrors),

    // Malformed JSON body, unknown enum value or unparseable path segment.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Self-registration is limited to client accounts")]
    RegistrationNotAllowed,

    #[error("Agency not found")]
    AgencyNotFound,

    #[error("Car not found")]
    CarNotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Bcrypt error: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Duplicate emails have always been answered with 400 by this API.
            AppError::EmailAlreadyExists => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::MissingToken | AppError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) | AppError::RegistrationNotAllowed => StatusCode::FORBIDDEN,
            AppError::AgencyNotFound | AppError::CarNotFound => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable kind, sent as the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => "validation_error",
            AppError::EmailAlreadyExists => "conflict",
            AppError::InvalidCredentials | AppError::MissingToken | AppError::InvalidToken => {
                "unauthenticated"
            }
            AppError::Forbidden(_) | AppError::RegistrationNotAllowed => "forbidden",
            AppError::AgencyNotFound | AppError::CarNotFound => "not_found",
            _ => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        let message = match &self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(m) => m.to_string(),
                            None => e.code.to_string(),
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": kind,
                    "message": "One or more fields are invalid.",
                    "details": details,
                }));
                return (status, body).into_response();
            }
            AppError::BadRequest(detail) => detail.clone(),
            AppError::EmailAlreadyExists => "Email already registered".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::MissingToken => "Missing or malformed bearer token".to_string(),
            AppError::InvalidToken => "Invalid or expired token".to_string(),
            AppError::Forbidden(reason) => reason.clone(),
            AppError::RegistrationNotAllowed => {
                "Self-registration is limited to client accounts".to_string()
            }
            AppError::AgencyNotFound => "Agency not found".to_string(),
            AppError::CarNotFound => "Car not found".to_string(),

            // Internal failures are logged in full and hidden from the caller.
            e => {
                tracing::error!("Internal server error: {}", e);
                "An unexpected error occurred".to_string()
            }
        };

        let body = Json(json!({ "error": kind, "message": message }));
        (status, body).into_response()
    }
}
