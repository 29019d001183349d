use serde_json::json;

use crate::{
    api::Resource,
    audit::log_audit,
    dto::auth::{UpdateAccountRequest, UserProfile},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::User,
    navigation::RoleRoutes,
    response::ApiResponse,
    state::AppState,
};

pub async fn get_account(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<UserProfile>> {
    let account: User = state.api.get(Resource::Users, &user.user_id).await?;
    Ok(ApiResponse::success("OK", UserProfile::from(account), None))
}

/// Updates name and email; the email must not belong to another user. The
/// password changes only when a new one is given and matches its retype.
pub async fn update_account(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateAccountRequest,
) -> AppResult<ApiResponse<UserProfile>> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(AppError::BadRequest("Please fill out all fields".into()));
    }
    let password = payload.password.unwrap_or_default();
    let retype = payload.retype_password.unwrap_or_default();
    if password != retype {
        return Err(AppError::BadRequest("Passwords do not match".into()));
    }

    let _gate = state.gates.users.lock().await;
    let users: Vec<User> = state.api.list(Resource::Users).await?;
    if users
        .iter()
        .any(|u| u.id != user.user_id && u.email.eq_ignore_ascii_case(email))
    {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }
    let mut account: User = state.api.get(Resource::Users, &user.user_id).await?;
    account.name = name.to_string();
    account.email = email.to_string();
    if !password.is_empty() {
        account.password = password;
    }
    let updated: User = state
        .api
        .update(Resource::Users, &user.user_id, &account)
        .await?;

    log_audit(
        Some(&user.user_id),
        "account_update",
        Some("users"),
        Some(json!({ "user_id": user.user_id })),
    );
    Ok(ApiResponse::success(
        "Profile updated successfully",
        UserProfile::from(updated),
        None,
    ))
}

pub fn routes_for(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<RoleRoutes>> {
    let routes = state
        .routes
        .routes_for(user.role)
        .cloned()
        .ok_or(AppError::Forbidden)?;
    Ok(ApiResponse::success("OK", routes, None))
}
