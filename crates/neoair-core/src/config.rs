use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, which keeps it usable in tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup instead of `set_var`/`remove_var`.
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("NEOAIR_ENV", "development"));
    let log_level = or_default("NEOAIR_LOG_LEVEL", "info");

    let sitemap_url = or_default(
        "NEOAIR_SITEMAP_URL",
        "https://www.neoairhvac.com/sitemap.xml",
    );
    let output_dir = PathBuf::from(or_default("NEOAIR_OUTPUT_DIR", "./reports"));

    let audit_request_timeout_secs = parse_u64("NEOAIR_AUDIT_REQUEST_TIMEOUT_SECS", "30")?;
    let audit_user_agent = or_default("NEOAIR_AUDIT_USER_AGENT", "neoair-audit/0.1 (seo-qa)");
    let audit_fetch_concurrency = parse_usize("NEOAIR_AUDIT_FETCH_CONCURRENCY", "5")?;
    let audit_batch_delay_ms = parse_u64("NEOAIR_AUDIT_BATCH_DELAY_MS", "500")?;
    let audit_min_word_count = parse_usize("NEOAIR_AUDIT_MIN_WORD_COUNT", "100")?;
    let audit_similarity_threshold = parse_f64("NEOAIR_AUDIT_SIMILARITY_THRESHOLD", "0.8")?;
    let audit_content_selector = or_default("NEOAIR_AUDIT_CONTENT_SELECTOR", "main");

    if audit_fetch_concurrency == 0 {
        return Err(ConfigError::Validation(
            "NEOAIR_AUDIT_FETCH_CONCURRENCY must be at least 1".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&audit_similarity_threshold) {
        return Err(ConfigError::Validation(format!(
            "NEOAIR_AUDIT_SIMILARITY_THRESHOLD must be within [0, 1], got {audit_similarity_threshold}"
        )));
    }

    Ok(AppConfig {
        env,
        log_level,
        sitemap_url,
        output_dir,
        audit_request_timeout_secs,
        audit_user_agent,
        audit_fetch_concurrency,
        audit_batch_delay_ms,
        audit_min_word_count,
        audit_similarity_threshold,
        audit_content_selector,
    })
}

/// Parse the `NEOAIR_ENV` value; unknown values fall back to development.
fn parse_environment(raw: &str) -> Environment {
    match raw.to_lowercase().as_str() {
        "production" | "prod" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
