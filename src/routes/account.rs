use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::auth::{UpdateAccountRequest, UserProfile},
    error::AppResult,
    middleware::auth::AuthUser,
    navigation::RoleRoutes,
    response::ApiResponse,
    services::account_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_account).put(update_account))
}

pub fn navigation_router() -> Router<AppState> {
    Router::new().route("/", get(navigation))
}

#[utoipa::path(
    get,
    path = "/api/account",
    responses(
        (status = 200, description = "Current user's profile", body = ApiResponse<UserProfile>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let resp = account_service::get_account(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/account",
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserProfile>),
        (status = 400, description = "Missing fields or mismatched passwords"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn update_account(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdateAccountRequest>,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let resp = account_service::update_account(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Entry screen and reachable screens for the caller's role", body = ApiResponse<RoleRoutes>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn navigation(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<RoleRoutes>>> {
    let resp = account_service::routes_for(&state, &user)?;
    Ok(Json(resp))
}
