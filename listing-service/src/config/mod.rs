use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model requested for listing generation.
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: Secret<String>,
    /// Base URL without trailing slash (e.g., https://api.openai.com/v1)
    pub api_base_url: String,
    /// Model used for every completion request (e.g., gpt-4o)
    pub model: String,
}

impl ListingConfig {
    /// Load configuration once at process start.
    ///
    /// The result is moved into the provider and router; nothing re-reads
    /// the environment per request.
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ListingConfig {
            common: common_config,
            openai: OpenAiConfig {
                api_key: Secret::new(get_env("OPENAI_API_KEY", None, is_prod)?),
                api_base_url: get_env("OPENAI_API_BASE_URL", Some(DEFAULT_API_BASE_URL), is_prod)?
                    .trim_end_matches('/')
                    .to_string(),
                model: get_env("LISTING_MODEL", Some(DEFAULT_MODEL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
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
