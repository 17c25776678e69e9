//! HTTP handlers for the inventory API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    JsonBody,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, InventoryValueResponse, MessageResponse, PriceRequest, Product,
    QuantityRequest,
};
use crate::notifier::Notifier;
use crate::repository::ProductRepository;
use crate::service::InventoryService;

/// OpenAPI documentation for the inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        list_products,
        get_product,
        delete_product,
        sell_product,
        restock_product,
        update_price,
        inventory_value,
    ),
    components(
        schemas(
            Product, CreateProduct, QuantityRequest, PriceRequest,
            MessageResponse, InventoryValueResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Inventory", description = "Inventory reporting")
    )
)]
pub struct ApiDoc;

type SharedService<R, N> = Arc<InventoryService<R, N>>;

/// Product and inventory routes. Callers are expected to put authentication in
/// front of this router.
pub fn router<R, N>(service: InventoryService<R, N>) -> Router
where
    R: ProductRepository + 'static,
    N: Notifier + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).delete(delete_product),
        )
        .route("/api/products/{id}/sell", post(sell_product))
        .route("/api/products/{id}/restock", post(restock_product))
        .route("/api/products/{id}/price", put(update_price))
        .route("/api/inventory/value", get(inventory_value))
        .with_state(shared_service)
}

/// Add a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn create_product<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.add_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn list_products<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_all_products().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn get_product<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_product<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
    Path(id): Path<String>,
) -> ProductResult<Json<MessageResponse>> {
    service.delete_product(&id).await?;
    Ok(Json(MessageResponse::new("product deleted successfully")))
}

/// Sell units of a product
#[utoipa::path(
    post,
    path = "/api/products/{id}/sell",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Units sold", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn sell_product<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<QuantityRequest>,
) -> ProductResult<Json<Product>> {
    let product = service.sell_product_units(&id, body.quantity).await?;
    Ok(Json(product))
}

/// Restock a product
#[utoipa::path(
    post,
    path = "/api/products/{id}/restock",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Product restocked", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn restock_product<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<QuantityRequest>,
) -> ProductResult<Json<Product>> {
    let product = service.restock_product(&id, body.quantity).await?;
    Ok(Json(product))
}

/// Change a product's price
#[utoipa::path(
    put,
    path = "/api/products/{id}/price",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = PriceRequest,
    responses(
        (status = 200, description = "Price updated", body = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_price<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<PriceRequest>,
) -> ProductResult<Json<MessageResponse>> {
    service.update_product_price(&id, body.price).await?;
    Ok(Json(MessageResponse::new("product price updated successfully")))
}

/// Total value of stock on hand
#[utoipa::path(
    get,
    path = "/api/inventory/value",
    tag = "Inventory",
    responses(
        (status = 200, description = "Sum of price times quantity", body = InventoryValueResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn inventory_value<R: ProductRepository, N: Notifier>(
    State(service): State<SharedService<R, N>>,
) -> ProductResult<Json<InventoryValueResponse>> {
    let inventory_value = service.get_inventory_value().await?;
    Ok(Json(InventoryValueResponse { inventory_value }))
}
