//! HTTP-level integration tests.
//!
//! These drive the full router over an in-memory SQLite store and verify
//! that the four outcome shapes surface as the expected status codes.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use atm_hex::{CrudService, inbound::HttpServer};
use atm_repo::{SqliteAccounts, SqliteCustomers, SqliteStore, SqliteTransactions};

/// Helper to create a test server over a fresh in-memory store.
async fn create_test_server() -> HttpServer<SqliteAccounts, SqliteCustomers, SqliteTransactions> {
    let store = SqliteStore::new("sqlite::memory:").await.unwrap();
    HttpServer::new(
        CrudService::new(store.accounts()),
        CrudService::new(store.customers()),
        CrudService::new(store.transactions()),
    )
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const ADA: &str = r#"{
    "first_name": "Ada",
    "last_name": "Lovelace",
    "address_line1": "12 Mill Lane",
    "city": "Belfast",
    "postcode": "BT1 1AA",
    "phone": "02890123456"
}"#;

/// Create a customer and return the assigned id.
async fn seed_customer(app: &Router) -> i64 {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/customers", ADA))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    json_body(response).await.as_i64().unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = create_test_server().await.router();

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_then_fetch_customer() {
    let app = create_test_server().await.router();

    let id = seed_customer(&app).await;
    assert_eq!(id, 1);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/customers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let customer = json_body(response).await;
    assert_eq!(customer["first_name"], "Ada");
    assert_eq!(customer["last_name"], "Lovelace");
}

#[tokio::test]
async fn test_list_customers_is_ok_even_when_empty() {
    let app = create_test_server().await.router();

    let response = app.oneshot(get_request("/api/customers")).await.unwrap();

    // An empty table is a 200 with an empty array, never a 204.
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_zero_id_is_bad_request_on_every_prefix() {
    let app = create_test_server().await.router();

    for uri in [
        "/api/accounts/0",
        "/api/customers/0",
        "/api/transactions/0",
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_missing_account_is_bad_request_but_missing_customer_is_no_content() {
    let app = create_test_server().await.router();

    let response = app
        .clone()
        .oneshot(get_request("/api/accounts/9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get_request("/api/customers/9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request("/api/transactions/9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_blank_account_is_no_content() {
    let app = create_test_server().await.router();

    let response = app
        .oneshot(json_request(Method::POST, "/api/accounts", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_account_returns_assigned_id() {
    let app = create_test_server().await.router();

    let body = r#"{
        "account_name": "Current",
        "customer_id": 1,
        "balance": 100000,
        "card_number": "4000111122223333",
        "pin": "1111"
    }"#;
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/accounts", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_i64(), Some(1));
}

#[tokio::test]
async fn test_update_missing_account_still_acknowledges() {
    let app = create_test_server().await.router();

    let body = r#"{
        "account_name": "ISA",
        "customer_id": 1,
        "balance": 500,
        "card_number": "4000111122223333",
        "pin": "1111"
    }"#;
    let response = app
        .oneshot(json_request(Method::PUT, "/api/accounts/42", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_customer_acknowledges_and_row_goes_away() {
    let app = create_test_server().await.router();

    let id = seed_customer(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/customers/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/customers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_transaction_round_trip_over_http() {
    let app = create_test_server().await.router();

    let body = r#"{
        "amount": 1000,
        "customer_id": 1,
        "transaction_type": "ATM",
        "transaction_date": "2025-03-01T09:30:00Z"
    }"#;
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/transactions", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = json_body(response).await.as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/transactions/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let transaction = json_body(response).await;
    assert_eq!(transaction["transaction_type"], "ATM");
    assert_eq!(transaction["amount"], 1000);
}
