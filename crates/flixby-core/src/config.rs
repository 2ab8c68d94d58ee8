use crate::app_config::{AppConfig, Environment, SearchMode};
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files. Used in tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default; the only switch that changes pipeline
/// behaviour is the presence of `GOOGLE_MAPS_API_KEY`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64_in = |var: &str, default: &str, min: u64, max: u64| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))?;
        if !(min..=max).contains(&value) {
            return Err(invalid(
                var,
                format!("{value} is outside the allowed range {min}..={max}"),
            ));
        }
        Ok(value)
    };

    let parse_usize_in =
        |var: &str, default: &str, min: usize, max: usize| -> Result<usize, ConfigError> {
            let raw = or_default(var, default);
            let value = raw
                .parse::<usize>()
                .map_err(|e| invalid(var, e.to_string()))?;
            if !(min..=max).contains(&value) {
                return Err(invalid(
                    var,
                    format!("{value} is outside the allowed range {min}..={max}"),
                ));
            }
            Ok(value)
        };

    let env = parse_environment(&or_default("FLIXBY_ENV", "development"))?;
    let log_level = or_default("FLIXBY_LOG_LEVEL", "info");

    let places_api_key = match lookup("GOOGLE_MAPS_API_KEY") {
        Ok(key) if key.trim().is_empty() => {
            return Err(invalid(
                "GOOGLE_MAPS_API_KEY",
                "set but blank; unset it to use synthetic place data".to_string(),
            ));
        }
        Ok(key) => Some(key),
        Err(_) => None,
    };

    let places_base_url = or_default("FLIXBY_PLACES_BASE_URL", "http://localhost:3001");
    let places_search_mode = parse_search_mode(&or_default("FLIXBY_PLACES_SEARCH_MODE", "text"))?;
    let html_proxy_url = or_default("FLIXBY_HTML_PROXY_URL", "https://api.allorigins.win/get");

    let request_timeout_secs = parse_u64_in("FLIXBY_REQUEST_TIMEOUT_SECS", "5", 1, 120)?;
    let user_agent = or_default("FLIXBY_USER_AGENT", "flixby/0.1 (quick-setup)");

    let suggest_min_chars = parse_usize_in("FLIXBY_SUGGEST_MIN_CHARS", "2", 1, 64)?;
    let suggest_debounce_ms = parse_u64_in("FLIXBY_SUGGEST_DEBOUNCE_MS", "300", 50, 5_000)?;
    let suggest_max_results = parse_usize_in("FLIXBY_SUGGEST_MAX_RESULTS", "5", 1, 5)?;

    Ok(AppConfig {
        env,
        log_level,
        places_api_key,
        places_base_url,
        places_search_mode,
        html_proxy_url,
        request_timeout_secs,
        user_agent,
        suggest_min_chars,
        suggest_debounce_ms,
        suggest_max_results,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FLIXBY_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

fn parse_search_mode(s: &str) -> Result<SearchMode, ConfigError> {
    match s {
        "text" => Ok(SearchMode::Text),
        "autocomplete" => Ok(SearchMode::Autocomplete),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FLIXBY_PLACES_SEARCH_MODE".to_string(),
            reason: format!("expected text or autocomplete; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
