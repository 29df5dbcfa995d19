use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub api_key: String,
    pub from_number: String,
    pub country_code: String,
    pub messaging_base_url: Url,
    pub debug: bool,
    pub port: u16,
    pub enable_swagger: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP").separator("_"))
            .set_default("api_key", "default-api-key-change-me")?
            .set_default("from_number", "+10000000000")?
            .set_default("country_code", "1")?
            .set_default("messaging_base_url", "https://api.telnyx.com")?
            .set_default("debug", false)?
            .set_default("port", 8080)?
            .set_default("enable_swagger", true)?
            .build()?;

        config.try_deserialize()
    }
}
