#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::StatusCode;
use common::{booking_body, car_body, TestApp};
use uuid::Uuid;

#[tokio::test]
async fn booking_total_is_price_times_whole_days() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;
    let car = app.create_car(&admin, agency, 50.0).await;

    let (status, body) = app
        .post(
            "/api/public/bookings",
            None,
            booking_body(car, "2024-01-01", "2024-01-03"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let booking = &body["booking"];
    assert_eq!(booking["total_amount"].as_f64(), Some(100.0));
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["agency_id"], agency.to_string());
    assert_eq!(booking["car_id"], car.to_string());
}

#[tokio::test]
async fn partial_days_are_not_charged() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;
    let car = app.create_car(&admin, agency, 80.0).await;

    let (status, body) = app
        .post(
            "/api/public/bookings",
            None,
            booking_body(car, "2024-03-01T10:00:00Z", "2024-03-04T09:00:00Z"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["booking"]["total_amount"].as_f64(), Some(160.0));
}

#[tokio::test]
async fn overlapping_bookings_are_all_recorded() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;
    let car = app.create_car(&admin, agency, 50.0).await;

    for _ in 0..2 {
        let (status, _) = app
            .post(
                "/api/public/bookings",
                None,
                booking_body(car, "2024-01-01", "2024-01-05"),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app
        .get(&format!("/api/agency/{}/bookings", agency), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn staff_sees_bookings_of_its_agency() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;
    let car = app.create_car(&admin, agency, 50.0).await;
    let staff = app.register_token("staff@agency.com", "staff", Some(agency)).await;

    app.post(
        "/api/public/bookings",
        None,
        booking_body(car, "2024-01-01", "2024-01-02"),
    )
    .await;

    let (status, body) = app
        .get(&format!("/api/agency/{}/bookings", agency), Some(&staff))
        .await;

    assert_eq!(status, StatusCode::OK);
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["client_email"], "client@example.com");
    assert_eq!(bookings[0]["message"], "This is a test booking");
}

#[tokio::test]
async fn booking_an_unknown_car_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/public/bookings",
            None,
            booking_body(Uuid::new_v4(), "2024-01-01", "2024-01-03"),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Car not found");
}

#[tokio::test]
async fn reversed_dates_are_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;
    let car = app.create_car(&admin, agency, 50.0).await;

    let (status, body) = app
        .post(
            "/api/public/bookings",
            None,
            booking_body(car, "2024-01-03", "2024-01-01"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["return_date"].is_array());
}

#[tokio::test]
async fn prices_with_fractional_cents_or_out_of_range_are_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;

    for price in [49.999, 7.0e28] {
        let (status, body) = app
            .post("/api/agency/cars", Some(&admin), car_body(agency, price))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price} accepted");
        assert!(body["details"]["price_per_day"].is_array());
    }

    let (_, body) = app.get(&format!("/api/agency/{}/cars", agency), Some(&admin)).await;
    assert!(body["cars"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn booking_total_beyond_the_stored_range_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;
    let car = app.create_car(&admin, agency, 9_999_999_999.99).await;

    let (status, body) = app
        .post(
            "/api/public/bookings",
            None,
            booking_body(car, "2024-01-01", "2024-12-31"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"]["return_date"].is_array());

    let (status, _) = app
        .post(
            "/api/public/bookings",
            None,
            booking_body(car, "2024-01-01", "2024-01-03"),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn whitespace_only_client_name_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Agency").await;
    let car = app.create_car(&admin, agency, 50.0).await;

    let mut body = booking_body(car, "2024-01-01", "2024-01-03");
    body["client_name"] = "   ".into();
    let (status, body) = app.post("/api/public/bookings", None, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["client_name"].is_array());
}

#[tokio::test]
async fn public_catalogue_lists_available_cars_with_agency() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let agency = app.create_agency(&admin, "Sunny Rentals").await;
    app.create_car(&admin, agency, 50.0).await;
    app.create_car(&admin, agency, 70.0).await;

    let (status, body) = app
        .get(&format!("/api/public/agencies/{}/cars", agency), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agency"]["name"], "Sunny Rentals");
    assert_eq!(body["cars"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn public_catalogue_of_unknown_agency_is_empty() {
    let app = TestApp::new().await;

    let (status, body) = app
        .get(&format!("/api/public/agencies/{}/cars", Uuid::new_v4()), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["agency"].is_null());
    assert!(body["cars"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_booking_body_is_a_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/public/bookings",
            None,
            serde_json::json!({ "car_id": "nope" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}
