//! Process Configuration
//!
//! Everything the server needs from the environment, read once at startup.

use anyhow::{Context, bail};
use auth::AuthConfig;
use std::env;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            other => bail!("APP_ENV must be `development` or `production`, got `{}`", other),
        }
    }

    fn default_for_build() -> Self {
        if cfg!(debug_assertions) {
            AppEnv::Development
        } else {
            AppEnv::Production
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub app_env: AppEnv,
    pub port: u16,
    pub database_max_connections: u32,
    pub password_pepper: Option<String>,
    pub frontend_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .context("JWT_SECRET must be set and non-empty")?;

        let app_env = match lookup("APP_ENV") {
            Some(value) => AppEnv::parse(&value)?,
            None => AppEnv::default_for_build(),
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            jwt_secret,
            app_env,
            port,
            database_max_connections,
            password_pepper: lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()),
            frontend_origins,
        })
    }

    /// Auth configuration derived from this config
    ///
    /// The session cookie is only marked `Secure` outside development.
    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        Ok(AuthConfig::new(self.jwt_secret.as_bytes())?
            .with_cookie_secure(self.app_env == AppEnv::Production)
            .with_pepper(self.password_pepper.as_ref().map(|p| p.as_bytes().to_vec())))
    }
}
