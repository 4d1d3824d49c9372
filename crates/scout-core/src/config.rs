use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
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

    let gemini_api_key = require("GEMINI_API_KEY")?;
    let env = parse_environment(&or_default("SCOUT_ENV", "development"));
    let log_level = or_default("SCOUT_LOG_LEVEL", "info");
    let gemini_model = or_default("SCOUT_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_base_url = or_default("SCOUT_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let request_timeout_secs = parse_u64("SCOUT_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        log_level,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        request_timeout_secs,
    })
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

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("GEMINI_API_KEY", "test-key");
        m
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GEMINI_API_KEY"),
            "expected MissingEnvVar(GEMINI_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_treats_blank_api_key_as_missing() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "   ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GEMINI_API_KEY"),
            "expected MissingEnvVar(GEMINI_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.gemini_api_key, "test-key");
        assert_eq!(cfg.gemini_model, "gemini-2.5-flash");
        assert_eq!(
            cfg.gemini_base_url,
            "https://generativelanguage.googleapis.com/"
        );
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_honours_overrides() {
        let mut map = full_env();
        map.insert("SCOUT_ENV", "production");
        map.insert("SCOUT_LOG_LEVEL", "debug");
        map.insert("SCOUT_GEMINI_MODEL", "gemini-2.0-flash");
        map.insert("SCOUT_GEMINI_BASE_URL", "http://localhost:8080");
        map.insert("SCOUT_REQUEST_TIMEOUT_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.gemini_model, "gemini-2.0-flash");
        assert_eq!(cfg.gemini_base_url, "http://localhost:8080");
        assert_eq!(cfg.request_timeout_secs, 5);
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map = full_env();
        map.insert("SCOUT_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCOUT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(SCOUT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-key"), "api key leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
