//! Router-level tests that never reach the database: every request here is
//! rejected (or answered) before a query is issued, so the state holds a
//! disconnected pool.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, ServerState};

fn app() -> Router {
    let state = ServerState { db: DatabaseConnection::Disconnected };
    routes::build_router(state, tower_http::cors::CorsLayer::very_permissive())
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let resp = app().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn openapi_document_lists_rental_routes() {
    let (status, body) = send(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/rentals"));
    assert!(paths.contains_key("/rentals/{id}/return"));
}

#[tokio::test]
async fn rental_with_zero_days_is_bad_request() {
    let (status, body) = send(post_json("/rentals", json!({"customerId": 1, "gameId": 1, "daysRented": 0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert!(details[0].as_str().unwrap().contains("daysRented"));
}

#[tokio::test]
async fn rental_body_missing_field_is_unprocessable() {
    let resp = app()
        .oneshot(post_json("/rentals", json!({"customerId": 1, "gameId": 1})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn blank_category_name_is_unprocessable() {
    let (status, body) = send(post_json("/categories", json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn category_name_wider_than_column_is_unprocessable() {
    let (status, body) = send(post_json("/categories", json!({"name": "c".repeat(130)}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
}

#[tokio::test]
async fn game_violations_are_all_reported() {
    let (status, body) = send(post_json(
        "/games",
        json!({"name": "", "image": "", "stockTotal": 0, "pricePerDay": 0, "categoryId": 1}),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn invalid_customer_is_bad_request() {
    let (status, body) = send(post_json(
        "/customers",
        json!({"name": "Ana", "phone": "12ab", "cpf": "123", "birthday": "not-a-date"}),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn store_failure_is_opaque_500() {
    let (status, body) = send(Request::get("/rentals").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal Server Error"}));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = app().oneshot(Request::get("/nope").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
