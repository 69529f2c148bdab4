// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Rental SaaS API", version = "1.0.0"),
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Admin ---
        handlers::admin::create_agency,
        handlers::admin::list_agencies,
        handlers::admin::get_analytics,

        // --- Agency ---
        handlers::agency::create_car,
        handlers::agency::list_agency_cars,
        handlers::agency::list_agency_bookings,

        // --- Public ---
        handlers::public::list_public_cars,
        handlers::public::create_booking,

        handlers::health::health_check,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::UserProfile,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Agencies ---
            models::agency::AgencyStatus,
            models::agency::Agency,
            models::agency::CreateAgencyPayload,
            models::agency::AgencyResponse,
            models::agency::AgencyList,
            models::analytics::PlatformAnalytics,

            // --- Cars ---
            models::car::CarStatus,
            models::car::Car,
            models::car::CreateCarPayload,
            models::car::CarResponse,
            models::car::CarList,
            models::car::PublicCarsResponse,

            // --- Bookings ---
            models::booking::BookingStatus,
            models::booking::Booking,
            models::booking::CreateBookingPayload,
            models::booking::BookingResponse,
            models::booking::BookingList,

            handlers::health::HealthStatus,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Admin", description = "Super-admin management of agencies"),
        (name = "Agency", description = "Agency staff: cars and bookings of one agency"),
        (name = "Public", description = "Car catalogue and booking requests"),
        (name = "Health", description = "Liveness")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
