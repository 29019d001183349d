use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Role, User},
    navigation::RouteEntry,
};

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
    /// Screen the client should open first.
    pub entry: RouteEntry,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub role: u8,
    pub exp: usize,
}

/// A user without the password field.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[schema(value_type = u8)]
    pub role: Role,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateAccountRequest {
    pub name: String,
    pub email: String,
    /// Left unchanged when absent or empty.
    pub password: Option<String>,
    pub retype_password: Option<String>,
}
