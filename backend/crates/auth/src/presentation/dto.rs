//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Register User
// ============================================================================

/// Register/login request
///
/// Fields are optional so that an absent field reaches validation as a
/// missing field instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Public user fields plus an outcome message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub message: String,
}

impl UserResponse {
    pub fn new(user: &User, message: impl Into<String>) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            role: user.role,
            message: message.into(),
        }
    }
}
