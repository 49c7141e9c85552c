//! Session Token Issuing and Verification
//!
//! Token format: `<user uuid>.<expiry unix secs>.<base64url(HMAC-SHA256)>`,
//! where the MAC covers `<user uuid>.<expiry unix secs>`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and checks session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    config: Arc<AuthConfig>,
}

impl TokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for `user_id`, valid for the configured TTL
    pub fn issue(&self, user_id: &UserId) -> IssuedToken {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> IssuedToken {
        let ttl = chrono::Duration::from_std(self.config.token_ttl)
            .unwrap_or_else(|_| chrono::Duration::days(7));
        let expires_at = now + ttl;

        let payload = format!("{}.{}", user_id, expires_at.timestamp());
        let signature = hmac_sha256(&self.config.token_secret, payload.as_bytes());

        IssuedToken {
            token: format!("{}.{}", payload, to_base64url(&signature)),
            expires_at,
        }
    }

    /// Verify signature and expiry, returning the subject
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<UserId> {
        let (payload, signature_b64) = token.rsplit_once('.').ok_or(AuthError::InvalidToken)?;
        let (user_id_str, exp_str) = payload.split_once('.').ok_or(AuthError::InvalidToken)?;

        let signature = from_base64url(signature_b64).map_err(|_| AuthError::InvalidToken)?;
        if !verify_hmac_sha256(&self.config.token_secret, payload.as_bytes(), &signature) {
            return Err(AuthError::InvalidToken);
        }

        let exp: i64 = exp_str.parse().map_err(|_| AuthError::InvalidToken)?;
        if now.timestamp() >= exp {
            return Err(AuthError::InvalidToken);
        }

        UserId::parse(user_id_str).map_err(|_| AuthError::InvalidToken)
    }
}
