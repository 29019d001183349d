use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::{
    api::Resource,
    audit::log_audit,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest, UserProfile},
    error::{AppError, AppResult},
    models::{NewUser, Role, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<UserProfile>> {
    let RegisterRequest {
        name,
        email,
        password,
        confirm_password,
    } = payload;
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
    {
        return Err(AppError::BadRequest("Please fill out all fields.".into()));
    }
    if password != confirm_password {
        return Err(AppError::BadRequest("Passwords do not match.".into()));
    }

    let _gate = state.gates.users.lock().await;
    let users: Vec<User> = state.api.list(Resource::Users).await?;
    if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let user: User = state
        .api
        .create(
            Resource::Users,
            &NewUser {
                name,
                email,
                password: &password,
                role: Role::SHOPPER,
            },
        )
        .await?;

    log_audit(
        Some(&user.id),
        "user_register",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    );
    Ok(ApiResponse::success(
        "Registration complete!",
        UserProfile::from(user),
        None,
    ))
}

/// Matches the credentials against the full user collection. The mock API
/// stores passwords as plain text, so the comparison is a plain equality.
pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    // Upstream records without a password deserialize to "" and must not match.
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }
    let users: Vec<User> = state.api.list(Resource::Users).await?;
    let user = match users
        .into_iter()
        .find(|u| u.email == email && u.password == password)
    {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    let entry = state
        .routes
        .entry_for(user.role)
        .cloned()
        .ok_or_else(|| AppError::BadRequest(format!("No entry route for role {}", user.role.0)))?;

    let token = issue_token(&state.jwt_secret, &user)?;

    log_audit(
        Some(&user.id),
        "user_login",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id, "role": user.role.0 })),
    );

    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token: format!("Bearer {}", token),
            user: UserProfile::from(user),
            entry,
        },
        Some(Meta::empty()),
    ))
}

pub fn issue_token(secret: &str, user: &User) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.clone(),
        role: user.role.0,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}
