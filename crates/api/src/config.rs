use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

/// SQLite file used when running in development.
pub const DEVELOPMENT_DATABASE_URL: &str = "sqlite://sample.db?mode=rwc";

/// Configuration could not be loaded from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Embedded SQLite file, no external database needed.
    Development,
    /// Networked PostgreSQL reached through `DATABASE_URL`.
    Production,
}

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the production database URL have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub environment: Environment,
    pub database: DatabaseConfig,
    /// Parsed from comma-separated `CORS_ORIGINS`; `*` allows any origin.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for paths no route claims (default: `public`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `APP_ENV`              | `production`               |
    /// | `DATABASE_URL`         | required in production     |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `CORS_ORIGINS`         | `*`                        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `public`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &'static str, default: &str| -> String {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        let host = parse_var("HOST", var("HOST", "0.0.0.0"))?;
        let port = parse_var("PORT", var("PORT", "3000"))?;
        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?;
        let max_connections = parse_var("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS", "20"))?;
        let static_dir = PathBuf::from(var("STATIC_DIR", "public"));

        let environment = match var("APP_ENV", "production").as_str() {
            "development" => Environment::Development,
            _ => Environment::Production,
        };

        let url = match environment {
            Environment::Development => DEVELOPMENT_DATABASE_URL.to_string(),
            Environment::Production => lookup("DATABASE_URL")
                .filter(|url| !url.is_empty())
                .ok_or(ConfigError::Missing {
                    var: "DATABASE_URL",
                })?,
        };

        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS", "*"))?;

        Ok(Self {
            host,
            port,
            environment,
            database: DatabaseConfig {
                url,
                max_connections,
            },
            cors_origins,
            request_timeout_secs,
            static_dir,
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
