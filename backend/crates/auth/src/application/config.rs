//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use thiserror::Error;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Length of a generated token secret in bytes
const RANDOM_SECRET_LEN: usize = 32;

/// Rejected configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("token signing secret must not be empty")]
    EmptySecret,
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HMAC-SHA256 key used to sign session tokens
    pub token_secret: Vec<u8>,
    /// Token validity and cookie Max-Age (7 days)
    pub token_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let token_secret = token_secret.into();
        if token_secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        Ok(Self::from_secret(token_secret))
    }

    fn from_secret(token_secret: Vec<u8>) -> Self {
        Self {
            session_cookie_name: "jwt".to_string(),
            token_secret,
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 7 days
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            password_pepper: None,
        }
    }

    /// Create config with a random signing secret
    ///
    /// Tokens do not survive a restart with this config.
    pub fn with_random_secret() -> Self {
        Self::from_secret(platform::crypto::random_bytes(RANDOM_SECRET_LEN))
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Set the Secure cookie attribute
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper.filter(|p| !p.is_empty());
        self
    }

    /// Cookie attributes for the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl.as_secs()),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
