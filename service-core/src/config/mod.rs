use crate::error::AppError;
use config::{Config as Cfg, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Load `APP__*` variables (e.g. `APP__PORT`) after reading `.env` if present.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_environment(app_environment())
    }

    fn from_environment(environment: Environment) -> Result<Self, AppError> {
        let config = Cfg::builder().add_source(environment).build()?;
        Ok(config.try_deserialize()?)
    }
}

fn app_environment() -> Environment {
    Environment::with_prefix("APP").separator("__")
}
