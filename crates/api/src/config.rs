use anyhow::{Context, Result};
use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Process-level settings read once at start-up.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub skip_migrations: bool,
    pub gql_introspection: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            port,
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.into()),
            ),
            skip_migrations: env_flag("SKIP_MIGRATIONS", false),
            gql_introspection: env_flag("GQL_INTROSPECTION", false),
        })
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

pub fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(default)
}
