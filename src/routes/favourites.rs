use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::favourites::{AddFavouriteRequest, AddFavouriteResponse, FavouriteList},
    error::AppResult,
    response::ApiResponse,
    services::favourite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favourites).post(add_favourite))
        .route("/{product_id}", delete(remove_favourite))
}

#[utoipa::path(
    get,
    path = "/api/favourites",
    responses(
        (status = 200, description = "List favourites", body = ApiResponse<FavouriteList>)
    ),
    tag = "Favourites"
)]
pub async fn list_favourites(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<FavouriteList>>> {
    let resp = favourite_service::list_favourites(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/favourites",
    request_body = AddFavouriteRequest,
    responses(
        (status = 200, description = "Added to favourites, or already present", body = ApiResponse<AddFavouriteResponse>),
        (status = 400, description = "Unknown product"),
    ),
    tag = "Favourites"
)]
pub async fn add_favourite(
    State(state): State<AppState>,
    Json(payload): Json<AddFavouriteRequest>,
) -> AppResult<Json<ApiResponse<AddFavouriteResponse>>> {
    let resp = favourite_service::add_favourite(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/favourites/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Removed from favourites", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Favourite not found")
    ),
    tag = "Favourites"
)]
pub async fn remove_favourite(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = favourite_service::remove_favourite(&state, &product_id).await?;
    Ok(Json(resp))
}
