use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse or is out of range.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse or is out of range.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_quality = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("quality must be in 0..=1, got {value}"),
            });
        }
        Ok(value)
    };

    let api_base_url = or_default("EUROLENS_API_BASE_URL", "https://api.eurolens.app");
    let request_timeout_secs = parse_u64("EUROLENS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("EUROLENS_USER_AGENT", "eurolens/0.1 (origin-analysis)");
    let history_path = PathBuf::from(or_default("EUROLENS_HISTORY_PATH", "./eurolens-history.json"));
    let state_path = PathBuf::from(or_default("EUROLENS_STATE_PATH", "./eurolens-state.json"));
    let image_max_dimension = parse_u32("EUROLENS_IMAGE_MAX_DIMENSION", "768")?;
    let image_jpeg_quality = parse_quality("EUROLENS_IMAGE_JPEG_QUALITY", "0.6")?;
    let log_level = or_default("EUROLENS_LOG_LEVEL", "info");
    let location_city = lookup("EUROLENS_LOCATION_CITY").ok();
    let location_country = lookup("EUROLENS_LOCATION_COUNTRY").ok();

    Ok(AppConfig {
        api_base_url,
        request_timeout_secs,
        user_agent,
        history_path,
        state_path,
        image_max_dimension,
        image_jpeg_quality,
        log_level,
        location_city,
        location_country,
    })
}
