use anyhow::{bail, Context, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_expiration_minutes: u64,
    pub refresh_token_expiration_days: u64,
    pub cookie_domain: Option<String>,
    pub cookie_secure: bool,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        Ok(Self {
            jwt_secret,
            access_token_expiration_minutes: env::var("ACCESS_TOKEN_EXPIRATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            refresh_token_expiration_days: env::var("REFRESH_TOKEN_EXPIRATION_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            cookie_domain: env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty()),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }

    pub fn refresh_cookie_max_age_secs(&self) -> u64 {
        self.refresh_token_expiration_days * 24 * 60 * 60
    }
}
