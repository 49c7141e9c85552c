//! User Password Value Object
//!
//! Delegates to `platform::password` for the cryptography. Argon2 is
//! deliberately slow, so hashing and verification run on the blocking pool.

use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate and wrap user input
    ///
    /// Empty input is a missing field; anything shorter than
    /// [`MIN_PASSWORD_LENGTH`] characters is rejected.
    pub fn new(raw: String) -> AuthResult<Self> {
        if raw.is_empty() {
            return Err(AuthError::MissingFields);
        }
        // Unicode scalar values, not UTF-16 units: "😀😀😀" counts as 3
        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(Self(ClearTextPassword::new(raw)))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password for storage
    pub async fn hash(raw: RawPassword, pepper: Option<Vec<u8>>) -> AuthResult<Self> {
        let hashed = tokio::task::spawn_blocking(move || raw.0.hash(pepper.as_deref()))
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".into()))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub async fn verify(&self, raw: RawPassword, pepper: Option<Vec<u8>>) -> AuthResult<bool> {
        let hashed = self.0.clone();
        tokio::task::spawn_blocking(move || hashed.verify(&raw.0, pepper.as_deref()))
            .await
            .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("secret".to_string()).is_ok());
        assert!(matches!(
            RawPassword::new("".to_string()),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            RawPassword::new("12345".to_string()),
            Err(AuthError::PasswordTooShort { min: 6 })
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        // Six characters, more than six bytes
        assert!(RawPassword::new("пароль".to_string()).is_ok());
        assert!(RawPassword::new("абвгд".to_string()).is_err());
        assert!(RawPassword::new("😀😀😀".to_string()).is_err());
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hashed = UserPassword::hash(raw("secret1"), None).await.unwrap();

        assert!(hashed.verify(raw("secret1"), None).await.unwrap());
        assert!(!hashed.verify(raw("secret2"), None).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_with_pepper() {
        let pepper = b"app_secret_pepper".to_vec();
        let hashed = UserPassword::hash(raw("secret1"), Some(pepper.clone()))
            .await
            .unwrap();

        assert!(hashed.verify(raw("secret1"), Some(pepper)).await.unwrap());
        assert!(!hashed.verify(raw("secret1"), None).await.unwrap());
    }

    #[tokio::test]
    async fn test_phc_string_roundtrip() {
        let hashed = UserPassword::hash(raw("secret1"), None).await.unwrap();
        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();

        assert!(restored.verify(raw("secret1"), None).await.unwrap());
        assert!(UserPassword::from_phc_string("plaintext").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let debug = format!("{:?}", raw("secret1"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("secret1"));
    }
}
