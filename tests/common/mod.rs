//! Shared helpers for the HTTP-level tests. Every `TestApp` runs on a fresh
//! in-memory store with the bootstrap super-admin already created.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::Algorithm;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use car_rental_backend::{
    config::{AppState, Config, RegistrationMode, StoreBackend},
    db::Stores,
    routes::build_router,
};

pub const ADMIN_EMAIL: &str = "admin@carrentalsaas.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn test_config(registration_mode: RegistrationMode) -> Config {
    Config {
        store_backend: StoreBackend::Memory,
        database_url: None,
        database_max_connections: 1,
        jwt_secret: "integration-test-secret".to_string(),
        jwt_algorithm: Algorithm::HS256,
        jwt_expiration_hours: 24,
        bind_addr: "127.0.0.1:0".to_string(),
        registration_mode,
        bcrypt_cost: 4,
        bootstrap_admin_email: ADMIN_EMAIL.to_string(),
        bootstrap_admin_password: ADMIN_PASSWORD.to_string(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub stores: Stores,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_mode(RegistrationMode::Permissive).await
    }

    pub async fn with_mode(registration_mode: RegistrationMode) -> Self {
        let stores = Stores::in_memory();
        let state = AppState::from_stores(test_config(registration_mode), stores.clone());
        state
            .auth_service
            .ensure_super_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("bootstrap failed");

        Self {
            router: build_router(state.clone()),
            state,
            stores,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/login",
                None,
                json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    pub async fn register(
        &self,
        email: &str,
        role: &str,
        agency_id: Option<Uuid>,
    ) -> (StatusCode, Value) {
        self.post(
            "/api/auth/register",
            None,
            json!({
                "email": email,
                "password": "password123",
                "first_name": "Test",
                "last_name": "User",
                "role": role,
                "agency_id": agency_id,
            }),
        )
        .await
    }

    /// Registers a user and returns its token.
    pub async fn register_token(&self, email: &str, role: &str, agency_id: Option<Uuid>) -> String {
        let (status, body) = self.register(email, role, agency_id).await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn create_agency(&self, admin_token: &str, name: &str) -> Uuid {
        let (status, body) = self
            .post(
                "/api/admin/agencies",
                Some(admin_token),
                json!({
                    "name": name,
                    "email": "contact@agency.com",
                    "phone": "123-456-7890",
                    "address": "123 Test Street, Test City",
                    "description": "A test agency",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "agency creation failed: {body}");
        body["agency"]["agency_id"].as_str().unwrap().parse().unwrap()
    }

    pub async fn create_car(&self, token: &str, agency_id: Uuid, price_per_day: f64) -> Uuid {
        let (status, body) = self
            .post("/api/agency/cars", Some(token), car_body(agency_id, price_per_day))
            .await;
        assert_eq!(status, StatusCode::CREATED, "car creation failed: {body}");
        body["car"]["car_id"].as_str().unwrap().parse().unwrap()
    }
}

pub fn car_body(agency_id: Uuid, price_per_day: f64) -> Value {
    json!({
        "title": "Test Car",
        "model": "Test Model",
        "brand": "Test Brand",
        "year": 2023,
        "plate_number": "TEST123",
        "color": "Blue",
        "price_per_day": price_per_day,
        "features": ["Air Conditioning", "GPS", "Bluetooth"],
        "agency_id": agency_id,
    })
}

pub fn booking_body(car_id: Uuid, pickup: &str, return_date: &str) -> Value {
    json!({
        "car_id": car_id,
        "client_email": "client@example.com",
        "client_name": "Test Client",
        "client_phone": "987-654-3210",
        "pickup_date": pickup,
        "return_date": return_date,
        "pickup_location": "Airport",
        "return_location": "Downtown",
        "message": "This is a test booking",
    })
}
