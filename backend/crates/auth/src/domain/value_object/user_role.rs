use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Customer = 0,
    Admin = 1,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Customer => "customer",
            Admin => "admin",
        }
    }

    /// Catalog mutations are reserved for admins
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use UserRole::*;
        match id {
            0 => Some(Customer),
            1 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> AuthResult<Self> {
        use UserRole::*;
        match code {
            "customer" => Ok(Customer),
            "admin" => Ok(Admin),
            _ => Err(AuthError::InvalidRole),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_id() {
        assert_eq!(UserRole::from_id(0), Some(UserRole::Customer));
        assert_eq!(UserRole::from_id(1), Some(UserRole::Admin));
        assert_eq!(UserRole::from_id(7), None);
    }

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("customer").unwrap(), UserRole::Customer);
        assert_eq!(UserRole::from_code("admin").unwrap(), UserRole::Admin);
        assert!(matches!(
            UserRole::from_code("superuser"),
            Err(AuthError::InvalidRole)
        ));
        assert!(matches!(UserRole::from_code("Admin"), Err(AuthError::InvalidRole)));
    }

    #[test]
    fn test_user_role_default_and_display() {
        assert_eq!(UserRole::default(), UserRole::Customer);
        assert_eq!(UserRole::Customer.to_string(), "customer");
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_user_role_checks() {
        assert!(!UserRole::Customer.is_admin());
        assert!(UserRole::Admin.is_admin());
    }
}
