//! End-to-end tests for Inventory API
//!
//! Build the full router (auth middleware, docs, fallback, health) over a
//! migrated in-memory SQLite database with a seeded manager.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::JwtConfig;
use core_config::{app_info, server::ServerConfig, Environment};
use database::sqlite::{connect_from_config, run_migrations, SqliteConfig};
use domain_managers::{HashingConfig, SeedConfig};
use domain_products::InventoryConfig;
use http_body_util::BodyExt;
use inventory_api::{api, AppState, Config};
use migration::Migrator;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

const EMAIL: &str = "manager@inventory.local";
const PASSWORD: &str = "s3cure-manager-password";
const SECRET: &str = "api-test-secret-that-is-long-enough!!";

fn config(seed_password: Option<&str>) -> Config {
    Config {
        app: app_info!(),
        environment: Environment::Development,
        server: ServerConfig::default(),
        database: SqliteConfig::new("sqlite::memory:"),
        jwt: JwtConfig::new(SECRET).unwrap(),
        inventory: InventoryConfig::default(),
        hashing: HashingConfig {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        },
        seed: SeedConfig {
            email: EMAIL.to_string(),
            password: seed_password.map(str::to_string),
        },
    }
}

async fn app_with(config: Config) -> Router {
    let db = connect_from_config(config.database.clone()).await.unwrap();
    run_migrations::<Migrator>(&db, "api_test").await.unwrap();

    let state = AppState::new(config, db);
    api::auth::seed_default_manager(&state).await.unwrap();
    inventory_api::app(&state).unwrap()
}

async fn app() -> Router {
    app_with(config(Some(PASSWORD))).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/login",
            None,
            Some(json!({"email": EMAIL, "password": PASSWORD})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = app().await;

    for (method, uri) in [
        ("GET", "/api/products"),
        ("POST", "/api/products"),
        ("GET", "/api/products/abc"),
        ("DELETE", "/api/products/abc"),
        ("POST", "/api/products/abc/sell"),
        ("POST", "/api/products/abc/restock"),
        ("PUT", "/api/products/abc/price"),
        ("GET", "/api/inventory/value"),
    ] {
        let (status, body) = send(&app, request(method, uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(body["error"], "unauthorized");
    }
}

#[tokio::test]
async fn test_invalid_tokens_are_rejected() {
    let app = app().await;

    let (status, _) = send(
        &app,
        request("GET", "/api/products", Some("not-a-jwt"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Signed with a different secret
    let foreign = axum_helpers::JwtAuth::new(
        &JwtConfig::new("some-other-secret-that-is-32-chars-long").unwrap(),
    )
    .create_token("intruder")
    .unwrap();
    let (status, _) = send(&app, request("GET", "/api/products", Some(&foreign), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = app().await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/login",
            None,
            Some(json!({"email": EMAIL, "password": "wrong"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid email or password");
}

#[tokio::test]
async fn test_no_seed_password_means_no_manager() {
    let app = app_with(config(None)).await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/login",
            None,
            Some(json!({"email": EMAIL, "password": PASSWORD})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_inventory_workflow() {
    let app = app().await;
    let token = login(&app).await;
    let token = Some(token.as_str());

    let (status, product) = send(
        &app,
        request(
            "POST",
            "/api/products",
            token,
            Some(json!({"name": "Widget", "price": 9.99, "quantity": 20})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = product["id"].as_str().unwrap().to_string();

    let (status, sold) = send(
        &app,
        request(
            "POST",
            &format!("/api/products/{}/sell", id),
            token,
            Some(json!({"quantity": 11})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sold["quantity"], 9);

    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/products/{}/sell", id),
            token,
            Some(json!({"quantity": 15})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "insufficient stock");

    let (status, restocked) = send(
        &app,
        request(
            "POST",
            &format!("/api/products/{}/restock", id),
            token,
            Some(json!({"quantity": 11})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restocked["quantity"], 20);

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/products/{}/price", id),
            token,
            Some(json!({"price": 5.0})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "product price updated successfully");

    let (status, body) = send(&app, request("GET", "/api/inventory/value", token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inventory_value"], 100.0);

    let (status, list) = send(&app, request("GET", "/api/products", token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        request("DELETE", &format!("/api/products/{}", id), token, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "product deleted successfully");

    let (status, body) = send(
        &app,
        request("GET", &format!("/api/products/{}", id), token, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "product not found");
}

#[tokio::test]
async fn test_logout_is_public() {
    let app = app().await;

    let (status, body) = send(&app, request("POST", "/logout", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "logout successful");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = app().await;

    let (status, body) = send(&app, request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "inventory_api");

    let (status, body) = send(&app, request("GET", "/ready", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app().await;

    let (status, body) = send(&app, request("GET", "/nope", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let app = app().await;

    let (status, body) = send(&app, request("GET", "/api-docs/openapi.json", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/products/{id}/sell"].is_object());
}
