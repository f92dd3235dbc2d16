use std::env;

use anyhow::Context;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_allow_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        // An unusable APP_PORT falls through to PORT instead of the default.
        let port = ["APP_PORT", "PORT"]
            .into_iter()
            .find_map(|key| lookup(key).and_then(|p| p.trim().parse::<u16>().ok()))
            .unwrap_or(3000);
        let cors_allow_origin = lookup("CORS_ALLOW_ORIGIN").filter(|o| !o.is_empty() && o != "*");
        Ok(Self {
            port,
            database_url: normalize_database_url(&database_url),
            host,
            cors_allow_origin,
        })
    }
}

// Some hosting providers still hand out the legacy `postgres://` scheme.
fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}
