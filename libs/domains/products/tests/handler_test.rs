//! Handler tests for Products domain
//!
//! These tests drive the product routes over an in-memory SQLite database:
//! - Request deserialization and malformed bodies
//! - Response shapes and HTTP status codes
//! - Domain error mapping
//!
//! Authentication is applied by the application, so it is not part of these tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase) -> Router {
    let repo = SqliteProductRepository::new(db.connection());
    let service = InventoryService::new(repo, LogNotifier, InventoryConfig::default());
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, name: &str, price: f64, quantity: i64) -> Product {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({"name": name, "price": price, "quantity": quantity}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let product = create(&app, &builder.name("product", "main"), 9.99, 20).await;

    assert!(!product.id.is_empty());
    assert_eq!(product.name, builder.name("product", "main"));
    assert_eq!(product.price, 9.99);
    assert_eq!(product.quantity, 20);
}

#[tokio::test]
async fn test_create_product_rejects_invalid_fields() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({"name": "", "price": 9.99, "quantity": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "product name cannot be empty");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": \"Widget\", \"price\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Invalid request body");

    // Wrong field type
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products/any/sell",
            json!({"quantity": "five"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_and_list_products() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let first = create(&app, "Widget", 9.99, 20).await;
    let second = create(&app, "Gadget", 5.0, 50).await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/products/{}", first.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, first);

    let response = app
        .oneshot(empty_request("GET", "/api/products"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products, vec![first, second]);
}

#[tokio::test]
async fn test_get_unknown_product_returns_404() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(empty_request("GET", "/api/products/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "product not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_sell_and_insufficient_stock() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let product = create(&app, "Widget", 9.99, 20).await;
    let uri = format!("/api/products/{}/sell", product.id);

    let response = app
        .clone()
        .oneshot(json_request("POST", &uri, json!({"quantity": 11})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let sold: Product = json_body(response.into_body()).await;
    assert_eq!(sold.quantity, 9);

    let response = app
        .clone()
        .oneshot(json_request("POST", &uri, json!({"quantity": 15})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "insufficient stock");

    let response = app
        .oneshot(json_request("POST", &uri, json!({"quantity": 0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "the quantity to be sold must be greater than zero");
}

#[tokio::test]
async fn test_restock_product() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let product = create(&app, "Widget", 9.99, 10).await;
    let uri = format!("/api/products/{}/restock", product.id);

    let response = app
        .clone()
        .oneshot(json_request("POST", &uri, json!({"quantity": 15})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let restocked: Product = json_body(response.into_body()).await;
    assert_eq!(restocked.quantity, 25);

    let response = app
        .oneshot(json_request("POST", &uri, json!({"quantity": -5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "restock amount must be positive");
}

#[tokio::test]
async fn test_update_price() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let product = create(&app, "Widget", 9.99, 10).await;
    let uri = format!("/api/products/{}/price", product.id);

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({"price": 12.5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "product price updated successfully");

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({"price": 0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "price must be greater than zero");

    let response = app
        .oneshot(empty_request("GET", &format!("/api/products/{}", product.id)))
        .await
        .unwrap();
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched.price, 12.5);
}

#[tokio::test]
async fn test_delete_product() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let product = create(&app, "Widget", 9.99, 10).await;
    let uri = format!("/api/products/{}", product.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "product deleted successfully");

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inventory_value() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/inventory/value"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value: InventoryValueResponse = json_body(response.into_body()).await;
    assert_eq!(value.inventory_value, 0.0);

    create(&app, "Widget", 2.5, 4).await;
    create(&app, "Gadget", 10.0, 3).await;

    let response = app
        .oneshot(empty_request("GET", "/api/inventory/value"))
        .await
        .unwrap();
    let value: InventoryValueResponse = json_body(response.into_body()).await;
    assert!((value.inventory_value - 40.0).abs() < 1e-9);
}
