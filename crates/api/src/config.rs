use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// A configuration value that is missing or cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'text' or 'json', got '{other}'")),
        }
    }
}

/// Credentials of the superuser account created at startup when absent.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether approving a blood request subtracts its units from inventory
    /// (default: `true`).
    pub approval_adjusts_inventory: bool,
    /// Log output format (default: text).
    pub log_format: LogFormat,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Optional superuser to create on startup.
    pub admin: Option<AdminBootstrap>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                    |
    /// |------------------------------|----------------------------|
    /// | `HOST`                       | `0.0.0.0`                  |
    /// | `PORT`                       | `3000`                     |
    /// | `CORS_ORIGINS`               | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                       |
    /// | `APPROVAL_ADJUSTS_INVENTORY` | `true`                     |
    /// | `LOG_FORMAT`                 | `text`                     |
    /// | `ADMIN_USERNAME`             | unset (no bootstrap)       |
    /// | `ADMIN_EMAIL`                | `<username>@localhost`     |
    /// | `ADMIN_PASSWORD`             | required with username     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", 3000)?;

        let raw_origins =
            std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into());
        let cors_origins = parse_cors_origins(&raw_origins)?;

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30)?;
        let approval_adjusts_inventory = env_flag("APPROVAL_ADJUSTS_INVENTORY", true)?;
        let log_format: LogFormat = env_or("LOG_FORMAT", LogFormat::Text)?;

        let jwt = JwtConfig::from_env()?;
        let admin = admin_from_env()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            approval_adjusts_inventory,
            log_format,
            jwt,
            admin,
        })
    }
}

/// Read and parse an optional env var, falling back to `default` when unset.
pub(crate) fn env_or<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Read a boolean env var. Accepts `true/false`, `1/0`, `yes/no`.
fn env_flag(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Ok(value) = std::env::var(var) else {
        return Ok(default);
    };
    parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
        var,
        value: value.clone(),
        reason: "expected true or false".into(),
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_cors_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map(|_| origin.to_string())
                .map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

fn admin_from_env() -> Result<Option<AdminBootstrap>, ConfigError> {
    let Some(username) = std::env::var("ADMIN_USERNAME")
        .ok()
        .filter(|u| !u.trim().is_empty())
    else {
        return Ok(None);
    };
    let password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|p| !p.is_empty())
        .ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?;
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| format!("{username}@localhost"));

    Ok(Some(AdminBootstrap {
        username,
        email,
        password,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("sometimes"), None);
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let origins = parse_cors_origins("http://a.test, http://b.test,,").unwrap();
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn cors_origin_with_control_characters_rejected() {
        let err = parse_cors_origins("http://ok.test,bad\u{7f}origin").unwrap_err();
        assert!(err.to_string().starts_with("CORS_ORIGINS has invalid value"));
    }
}
