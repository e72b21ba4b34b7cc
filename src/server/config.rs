//! Environment-based application configuration.
//!
//! `Config` is built once in `main` and passed by reference to startup and routing code.
//! Empty variables are treated the same as unset ones.

use axum::http::HeaderValue;
use std::str::FromStr;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_SCHEME: &str = "postgres";

/// Deployment environment selected with `ENVIRONMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Development => "note_keeper=debug,tower_http=debug,info",
            Self::Production => "info",
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    /// `*` was listed; any origin is accepted and credentials are not allowed.
    Any,
    List(Vec<HeaderValue>),
}

pub struct Config {
    pub environment: Environment,
    pub allowed_origins: AllowedOrigins,

    /// Assembled connection URL. `None` selects the in-memory note repository.
    pub database_url: Option<String>,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables were absent or valid
    /// - `Err(AppError::ConfigErr)` - A variable holds an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let environment = match var("ENVIRONMENT") {
            Some(value) => value
                .parse::<Environment>()
                .map_err(|_| invalid_var("ENVIRONMENT", &value))?,
            None => Environment::default(),
        };

        let allowed_origins = match var("CORS_ALLOW_ORIGINS") {
            Some(value) => parse_allowed_origins(&value)?,
            None => AllowedOrigins::Any,
        };

        let database_url = match var("NOTES_DB_URL") {
            Some(url) => Some(build_database_url(
                &url,
                DatabaseParts {
                    user: var("NOTES_DB_USER"),
                    password: var("NOTES_DB_PASSWORD"),
                    name: var("NOTES_DB_NAME"),
                    port: var("NOTES_DB_PORT"),
                },
            )?),
            None => None,
        };

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid_var("PORT", &value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            allowed_origins,
            database_url,
            host: var("HOST")
                .map(|host| host.trim().to_string())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn invalid_var(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse_allowed_origins(value: &str) -> Result<AllowedOrigins, ConfigError> {
    let origins: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(AllowedOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| invalid_var("CORS_ALLOW_ORIGINS", origin))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AllowedOrigins::List)
}

/// Optional connection parameters merged into `NOTES_DB_URL`.
struct DatabaseParts {
    user: Option<String>,
    password: Option<String>,
    name: Option<String>,
    port: Option<String>,
}

/// Combines `NOTES_DB_URL` with the separate connection variables.
///
/// A URL without a scheme is treated as a PostgreSQL host. Each part only fills a
/// component the URL does not already carry. SQLite URLs are used verbatim.
fn build_database_url(raw: &str, parts: DatabaseParts) -> Result<String, ConfigError> {
    let raw = raw.trim();
    if raw.starts_with("sqlite:") {
        return Ok(raw.to_string());
    }

    let mut url = if raw.contains("://") {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("{}://{}", DEFAULT_DATABASE_SCHEME, raw))?
    };

    if let Some(user) = parts.user {
        if url.username().is_empty() {
            url.set_username(&user)
                .map_err(|_| invalid_var("NOTES_DB_USER", &user))?;
        }
    }

    if let Some(password) = parts.password {
        if url.password().is_none() {
            url.set_password(Some(&password))
                .map_err(|_| invalid_var("NOTES_DB_PASSWORD", "<redacted>"))?;
        }
    }

    if let Some(port) = parts.port {
        let parsed = port
            .trim()
            .parse::<u16>()
            .map_err(|_| invalid_var("NOTES_DB_PORT", &port))?;
        if url.port().is_none() {
            url.set_port(Some(parsed))
                .map_err(|_| invalid_var("NOTES_DB_PORT", &port))?;
        }
    }

    if let Some(name) = parts.name {
        if matches!(url.path(), "" | "/") {
            url.set_path(&name);
        }
    }

    Ok(url.to_string())
}
