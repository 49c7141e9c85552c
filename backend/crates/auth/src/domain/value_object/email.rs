//! Email Value Object
//!
//! The login identifier. Stored lower-cased; the unique index on the
//! stored form is what makes emails case-insensitively unique.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create from user input, lower-casing it
    ///
    /// Only emptiness is rejected; format is not checked.
    pub fn new(email: impl AsRef<str>) -> AuthResult<Self> {
        let email = email.as_ref().to_lowercase();

        if email.is_empty() {
            return Err(AuthError::MissingFields);
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already normalized)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
