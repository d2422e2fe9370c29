//! Shared helpers for driving the router in-process

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use portal::{MemoryKeyValueStore, Portal, PortalConfig};
use webserver::WebServer;

pub const PLAYER_EMAIL: &str = "ana@example.com";

/// Router over a fresh in-memory portal with no checkout delay
pub async fn test_router() -> Router {
    let config = PortalConfig::default().with_checkout_phase_delay(Duration::ZERO);
    let portal = Portal::load(Arc::new(MemoryKeyValueStore::new()), config).await;
    let bind_address: SocketAddr = "127.0.0.1:0".parse().unwrap();
    WebServer::new(portal, bind_address).build_router()
}

/// Send one request and decode the JSON body
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(router, method, uri, body.map(|body| body.to_string()).unwrap_or_default()).await
}

/// Send a body verbatim, for payloads that are not valid JSON
pub async fn send_raw(router: &Router, method: Method, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(if body.is_empty() { Body::empty() } else { Body::from(body) })
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn patch(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::PATCH, uri, Some(body)).await
}

pub fn registration_form() -> Value {
    json!({
        "name": "Ana Lima",
        "email": PLAYER_EMAIL,
        "phone": "555-0100",
        "date_of_birth": "1995-04-02",
        "gender": "female",
        "emergency_name": "Rui Lima",
        "emergency_phone": "555-0101",
        "emergency_relationship": "Brother",
        "tournament_category": "singles-women",
        "skill_level": "advanced",
        "shirt_size": "M"
    })
}

pub fn hotel_selection() -> Value {
    json!({
        "hotel_id": "grand-plaza",
        "room_type": "double",
        "check_in": "2025-07-01",
        "check_out": "2025-07-03",
        "guests": 2
    })
}

pub fn meal_selection() -> Value {
    json!({
        "plan": "full-board",
        "start_date": "2025-07-01",
        "end_date": "2025-07-02"
    })
}

pub fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}
