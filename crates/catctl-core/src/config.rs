use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read token file {path}: {source}")]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = require("CATCTL_BASE_URL")?;
    let env = parse_environment(&or_default("CATCTL_ENV", "development"));
    let log_level = or_default("CATCTL_LOG_LEVEL", "info");
    let auth_token = lookup("CATCTL_AUTH_TOKEN").ok();
    let token_path = PathBuf::from(or_default("CATCTL_TOKEN_PATH", "./.catctl_token"));
    let request_timeout_secs = parse_u64("CATCTL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CATCTL_USER_AGENT", "catctl/0.1 (catalog-admin)");
    let page_limit = parse_u32("CATCTL_PAGE_LIMIT", "50")?;

    Ok(AppConfig {
        base_url,
        env,
        log_level,
        auth_token,
        token_path,
        request_timeout_secs,
        user_agent,
        page_limit,
    })
}

/// Resolve the bearer token: the env-provided token wins; otherwise the
/// token file is read and trimmed. A missing file is not an error — the
/// caller decides whether unauthenticated operation makes sense.
///
/// # Errors
///
/// Returns [`ConfigError::TokenFile`] when the file exists but cannot be read.
pub fn resolve_auth_token(config: &AppConfig) -> Result<Option<String>, ConfigError> {
    if let Some(token) = &config.auth_token {
        return Ok(Some(token.clone()));
    }
    match std::fs::read_to_string(&config.token_path) {
        Ok(contents) => {
            let trimmed = contents.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::TokenFile {
            path: config.token_path.clone(),
            source: e,
        }),
    }
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
