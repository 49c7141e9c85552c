//! User Name Value Object
//!
//! Display name chosen at registration, stored lower-cased.
//! Not an identifier: two users may share a name.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl AsRef<str>) -> AuthResult<Self> {
        let name = name.as_ref().to_lowercase();

        if name.is_empty() {
            return Err(AuthError::MissingFields);
        }

        Ok(Self(name))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercased() {
        assert_eq!(UserName::new("Al").unwrap().as_str(), "al");
        assert_eq!(UserName::new("ÉLODIE").unwrap().as_str(), "élodie");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(UserName::new(""), Err(AuthError::MissingFields)));
    }
}
