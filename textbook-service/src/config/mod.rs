use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct TextbookConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` leaves the backend inactive; endpoints answer with warning payloads.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

impl TextbookConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let request_timeout_secs = get_env(
            "GEMINI_TIMEOUT_SECS",
            Some(&DEFAULT_REQUEST_TIMEOUT_SECS.to_string()),
            is_prod,
        )?
        .parse()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("GEMINI_TIMEOUT_SECS is not a number: {}", e))
        })?;

        Ok(TextbookConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: get_optional_env("GEMINI_API_KEY"),
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), is_prod)?,
                base_url: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), false)?,
                request_timeout_secs,
            },
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", Some("info"), false)?,
                otlp_endpoint: get_optional_env("OTLP_ENDPOINT"),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
}

/// Read a variable that may legitimately be absent. Blank values count as absent.
fn get_optional_env(key: &str) -> Option<String> {
    non_blank(env::var(key).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match value {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_explicit_value() {
        let value = resolve("GEMINI_MODEL", Some("gemini-pro".into()), Some("x"), true).unwrap();
        assert_eq!(value, "gemini-pro");
    }

    #[test]
    fn resolve_falls_back_to_default_outside_prod() {
        let value = resolve("GEMINI_MODEL", None, Some(DEFAULT_GEMINI_MODEL), false).unwrap();
        assert_eq!(value, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn resolve_is_strict_in_prod() {
        let err = resolve("GEMINI_MODEL", None, Some(DEFAULT_GEMINI_MODEL), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn resolve_without_default_fails() {
        assert!(resolve("SOMETHING", None, None, false).is_err());
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" key ".into())), Some("key".to_string()));
    }
}
