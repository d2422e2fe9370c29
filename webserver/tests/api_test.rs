//! HTTP API tests
//!
//! Every request goes through the real router via `oneshot`, no socket.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn test_health_check() {
    let router = test_router().await;

    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_catalog_lists_offer() {
    let router = test_router().await;

    let (status, body) = get(&router, "/api/catalog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["hotels"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["meal_plans"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"]["registration_fee"], 150.0);
}

/// Register, book, quote and pay over HTTP
#[tokio::test]
async fn test_full_flow_over_http() {
    // Arrange
    let router = test_router().await;

    // Act & Assert: registration logs the player in
    let (status, body) = post(&router, "/api/register", registration_form()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["next_stage"], "book_hotel");
    assert_eq!(body["data"]["registration"]["tshirtSize"], "M");

    let (_, session) = get(&router, "/api/auth/session").await;
    assert_eq!(session["data"]["authenticated"], true);
    assert_eq!(session["data"]["session"]["player"]["email"], PLAYER_EMAIL);

    // Hotel
    let (status, quote) = post(&router, "/api/hotel/quote", hotel_selection()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["data"]["nights"], 2);
    let (status, body) = post(&router, "/api/hotel/bookings", hotel_selection()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["next_stage"], "book_meals");
    assert_eq!(body["data"]["record"]["totalAmount"], 360.0);

    // Meals
    let (status, body) = post(&router, "/api/meals/bookings", meal_selection()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["next_stage"], "checkout");
    assert_eq!(body["data"]["record"]["numberOfMeals"], 6);

    // Checkout
    let (status, summary) = get(&router, "/api/checkout").await;
    assert_eq!(status, StatusCode::OK);
    assert_close(&summary["data"]["totals"]["subtotal"], 610.0);
    assert_close(&summary["data"]["totals"]["total"], 628.30);

    let (status, body) = post(&router, "/api/checkout", json!({ "method": "bank_transfer" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["next_stage"], "dashboard");
    assert_eq!(body["data"]["record"]["status"], "completed");
    assert_eq!(body["data"]["record"]["items"].as_array().unwrap().len(), 3);

    // Dashboard
    let (status, dashboard) = get(&router, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["data"]["counts"]["payments"], 1);
    assert_close(&dashboard["data"]["total_spent"], 628.30);
}

#[tokio::test]
async fn test_incomplete_registration_lists_missing_fields() {
    let router = test_router().await;
    let mut form = registration_form();
    form["phone"] = json!("");

    let (status, body) = post(&router, "/api/register", form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(body["missing"], json!(["phone"]));
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let router = test_router().await;

    let (status, body) = send_raw(&router, Method::POST, "/api/auth/login", "{\"email\": ".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request format"));
}

#[tokio::test]
async fn test_wrong_field_type_uses_error_envelope() {
    let router = test_router().await;
    let mut form = registration_form();
    form["gender"] = json!(42);

    let (status, body) = post(&router, "/api/register", form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_booking_without_login_is_unauthorized() {
    let router = test_router().await;

    let (status, _) = post(&router, "/api/hotel/bookings", hotel_selection()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get(&router, "/api/dashboard").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_hotel_is_bad_request() {
    let router = test_router().await;
    let mut selection = hotel_selection();
    selection["hotel_id"] = json!("motel-6");

    let (status, _) = post(&router, "/api/hotel/quote", selection).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_with_nothing_booked_is_bad_request() {
    let router = test_router().await;
    post(&router, "/api/auth/login", json!({ "email": "new@example.com", "password": "x" })).await;

    let (status, body) = post(&router, "/api/checkout", json!({ "method": "cash" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let router = test_router().await;
    post(&router, "/api/auth/login", json!({ "email": PLAYER_EMAIL, "password": "x" })).await;

    let (status, body) = post(&router, "/api/auth/logout", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["authenticated"], false);

    let (_, session) = get(&router, "/api/auth/session").await;
    assert_eq!(session["data"]["authenticated"], false);
}

/// Admin routes reject players and accept the admin identity
#[tokio::test]
async fn test_admin_routes() {
    // Arrange
    let router = test_router().await;
    let (_, registered) = post(&router, "/api/register", registration_form()).await;
    let registration_id = registered["data"]["registration"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/admin/registrations/{registration_id}");

    // Act & Assert: the player cannot see or edit
    let (status, _) = get(&router, "/api/admin").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = patch(&router, &uri, json!({ "status": "cancelled" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The admin can
    let (status, login) = post(
        &router,
        "/api/auth/login",
        json!({ "email": "admin@tournament.com", "password": "admin123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["data"]["isAdmin"], true);

    let (status, body) = patch(&router, &uri, json!({ "status": "cancelled" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["updated"], true);

    let (status, admin) = get(&router, "/api/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(admin["data"]["counts"]["registrations"], 1);
    assert_eq!(admin["data"]["registrations"][0]["status"], "cancelled");

    let (status, _) = patch(&router, "/api/admin/payments/pay_missing", json!({ "status": "refunded" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
