use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};

use crate::{
    dto::cart::{
        AddToCartRequest, AddToCartResponse, AdjustQuantityRequest, CartView, CheckoutResponse,
    },
    error::AppResult,
    models::CartEntry,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view_cart).post(add_to_cart))
        .route("/checkout", post(checkout))
        .route("/{id}", delete(remove_from_cart))
        .route("/{id}/quantity", patch(change_quantity))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines joined to products, with total", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn view_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::view_cart(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add or increment cart entry", body = ApiResponse<AddToCartResponse>),
        (status = 400, description = "Unknown product"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<AddToCartResponse>>> {
    let resp = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{id}/quantity",
    params(
        ("id" = String, Path, description = "Cart entry ID")
    ),
    request_body = AdjustQuantityRequest,
    responses(
        (status = 200, description = "Quantity adjusted, never below 1", body = ApiResponse<CartEntry>),
        (status = 404, description = "Cart entry not found"),
    ),
    tag = "Cart"
)]
pub async fn change_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AdjustQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartEntry>>> {
    let resp = cart_service::change_quantity(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(
        ("id" = String, Path, description = "Cart entry ID")
    ),
    responses(
        (status = 200, description = "OK", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Cart entry not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::remove_from_cart(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/checkout",
    responses(
        (status = 200, description = "Order created and cart cleared", body = ApiResponse<CheckoutResponse>),
        (status = 400, description = "Cart is empty"),
        (status = 502, description = "Upstream failure; the cart may be partially cleared"),
    ),
    tag = "Cart"
)]
pub async fn checkout(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CheckoutResponse>>> {
    let resp = cart_service::checkout(&state).await?;
    Ok(Json(resp))
}
