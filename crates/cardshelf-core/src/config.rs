use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var holds an unparsable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var holds an unparsable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup without touching
/// `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
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

    let cards_sheet_url = lookup("CARDSHELF_CARDS_SHEET_URL").ok();
    let slabs_sheet_url = lookup("CARDSHELF_SLABS_SHEET_URL").ok();
    let catalog_path = PathBuf::from(or_default(
        "CARDSHELF_CATALOG_PATH",
        "./config/catalog.yaml",
    ));
    let log_level = or_default("CARDSHELF_LOG_LEVEL", "info");
    let fetch_timeout_secs = parse_u64("CARDSHELF_FETCH_TIMEOUT_SECS", "30")?;
    // 300 s matches the dashboard's original sheet-cache window.
    let cache_ttl_secs = parse_u64("CARDSHELF_CACHE_TTL_SECS", "300")?;

    Ok(AppConfig {
        cards_sheet_url,
        slabs_sheet_url,
        catalog_path,
        log_level,
        fetch_timeout_secs,
        cache_ttl_secs,
    })
}
