use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Settings shared by every service: only the HTTP port today.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Read `.env`, then an optional `configuration.{toml,yaml,json}` file,
    /// then `APP__*` environment variables (highest precedence).
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Cfg) -> Result<Self, AppError> {
        Ok(config.try_deserialize()?)
    }
}
