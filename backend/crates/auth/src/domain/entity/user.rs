//! User Entity
//!
//! Registered account. Credentials live in [`Credential`] so the entity
//! handed to request handlers never carries the password hash.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword, user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, exposed as `_id`
    pub user_id: UserId,
    /// Display name (lower-cased)
    pub name: UserName,
    /// Login identifier (lower-cased, unique)
    pub email: Email,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: UserName, email: Email, role: UserRole) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// A user together with its stored password hash
#[derive(Debug, Clone)]
pub struct Credential {
    pub user: User,
    pub password_hash: UserPassword,
}
