use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use crewseat_api::{app, AppState};
use crewseat_catalog::{profile_for, Seat};
use crewseat_core::service::VoucherService;
use crewseat_store::InMemoryVoucherRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let state = AppState {
        vouchers: VoucherService::new(Arc::new(InMemoryVoucherRepository::new())),
        cors_origins: vec!["http://localhost:3000".to_string()],
    };
    app(state)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn generate_body(aircraft: &str, date: &str) -> Value {
    json!({
        "name": "Sarah",
        "id": "98123",
        "flightNumber": "ID102",
        "date": date,
        "aircraft": aircraft,
    })
}

fn seats_of(value: &Value) -> Vec<Seat> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap().parse().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_generate_check_and_fetch_flow() {
    let app = test_app();
    let key = json!({ "flightNumber": "ID102", "date": "2025-07-12" });

    let (status, body) = post_json(&app, "/api/check", key.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "exists": false }));

    let (status, body) = post_json(&app, "/api/generate", generate_body("ATR", "2025-07-12")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let seats = seats_of(&body["seats"]);
    assert_eq!(seats.len(), 3);
    let atr = profile_for("ATR").unwrap();
    for seat in &seats {
        assert!((1..=18).contains(&seat.row));
        assert!(atr.columns.contains(&seat.column));
    }
    assert!(seats[0] != seats[1] && seats[0] != seats[2] && seats[1] != seats[2]);

    let (_, body) = post_json(&app, "/api/check", key.clone()).await;
    assert_eq!(body, json!({ "exists": true }));

    let (status, body) = post_json(&app, "/api/voucher", key).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exists"], true);
    assert_eq!(body["voucher"]["crew_name"], "Sarah");
    assert_eq!(body["voucher"]["aircraft_type"], "ATR");
    assert_eq!(body["voucher"]["seat1"], seats[0].to_string());
    assert_eq!(body["voucher"]["seat3"], seats[2].to_string());
}

#[tokio::test]
async fn test_generate_duplicate_is_conflict() {
    let app = test_app();
    let (status, _) = post_json(&app, "/api/generate", generate_body("Airbus 320", "2025-07-12")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(&app, "/api/generate", generate_body("Airbus 320", "2025-07-12")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Voucher already exists");
    assert_eq!(body["message"], "voucher already exists for flight ID102 on 2025-07-12");
}

#[tokio::test]
async fn test_generate_validation_errors() {
    let app = test_app();

    let (status, body) = post_json(&app, "/api/generate", generate_body("atr", "2025-07-12")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid aircraft type");

    let (status, body) = post_json(&app, "/api/generate", generate_body("ATR", "2025-02-30")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid date format");

    let (status, body) = post_json(&app, "/api/generate", json!({ "name": "Sarah" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, body) = post_json(&app, "/api/check", json!({ "flightNumber": "ID102" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_regenerate_seat_flow() {
    let app = test_app();
    let (_, body) = post_json(&app, "/api/generate", generate_body("ATR", "2025-07-12")).await;
    let original = seats_of(&body["seats"]);

    let (status, body) = post_json(
        &app,
        "/api/regenerate-seat",
        json!({ "flightNumber": "ID102", "date": "2025-07-12", "seatPosition": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let new_seat: Seat = body["newSeat"].as_str().unwrap().parse().unwrap();
    let all = seats_of(&body["allSeats"]);
    assert_eq!(all, vec![original[0], new_seat, original[2]]);
    assert_ne!(new_seat, original[0]);
    assert_ne!(new_seat, original[2]);
    assert!(profile_for("ATR").unwrap().contains(&new_seat));

    let (_, body) = post_json(&app, "/api/voucher", json!({ "flightNumber": "ID102", "date": "2025-07-12" })).await;
    assert_eq!(body["voucher"]["seat2"], new_seat.to_string());
}

#[tokio::test]
async fn test_regenerate_seat_errors() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/regenerate-seat",
        json!({ "flightNumber": "ID102", "date": "2025-07-12", "seatPosition": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Voucher not found");

    let (status, body) = post_json(
        &app,
        "/api/regenerate-seat",
        json!({ "flightNumber": "ID102", "date": "2025-07-12", "seatPosition": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid seat position");
}

#[tokio::test]
async fn test_list_aircraft() {
    let app = test_app();
    let request = Request::builder().uri("/api/aircraft").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let ids: Vec<&str> = body.as_array().unwrap().iter().map(|a| a["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ATR", "Airbus 320", "Boeing 737 Max"]);
    assert_eq!(body[0]["rows"], 18);
    assert_eq!(body[0]["columns"], json!(["A", "C", "D", "F"]));
}
