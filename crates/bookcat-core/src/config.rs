use url::Url;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://books.toscrape.com/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let parse_positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let base_url = normalize_base_url(&or_default("BOOKCAT_BASE_URL", DEFAULT_BASE_URL))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "BOOKCAT_BASE_URL".to_string(),
            reason: "must be an absolute http(s) URL without query or fragment".to_string(),
        })?;
    let output_path = PathBuf::from(or_default("BOOKCAT_OUTPUT_PATH", "data/books.csv"));
    let log_level = or_default("BOOKCAT_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("BOOKCAT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("BOOKCAT_USER_AGENT", "bookcat/0.1 (catalog-extraction)");
    let max_pages = parse_positive_usize("BOOKCAT_MAX_PAGES", "1000")?;
    let detail_concurrency = parse_positive_usize("BOOKCAT_DETAIL_CONCURRENCY", "1")?;

    Ok(AppConfig {
        base_url,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        max_pages,
        detail_concurrency,
    })
}

/// Ensures the site root ends with exactly one `/` so relative joins land
/// under it rather than replacing its last segment.
///
/// Returns `None` unless `raw` parses as an `http` or `https` URL with a host
/// and no query string or fragment.
#[must_use]
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let mut url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https")
        || url.host_str().is_none()
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return None;
    }
    let path = format!("{}/", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Some(url.into())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
