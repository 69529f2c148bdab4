// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

pub fn build_router(app_state: AppState) -> Router {
    // Public authentication routes
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let me_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let admin_routes = Router::new()
        .route(
            "/agencies",
            post(handlers::admin::create_agency).get(handlers::admin::list_agencies),
        )
        .route("/analytics", get(handlers::admin::get_analytics))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let agency_routes = Router::new()
        .route("/cars", post(handlers::agency::create_car))
        .route("/{agency_id}/cars", get(handlers::agency::list_agency_cars))
        .route(
            "/{agency_id}/bookings",
            get(handlers::agency::list_agency_bookings),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let public_routes = Router::new()
        .route(
            "/agencies/{agency_id}/cars",
            get(handlers::public::list_public_cars),
        )
        .route("/bookings", post(handlers::public::create_booking));

    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .nest("/api/auth", auth_routes.merge(me_routes))
        .nest("/api/admin", admin_routes)
        .nest("/api/agency", agency_routes)
        .nest("/api/public", public_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
