use serde::Deserialize;
use std::collections::HashMap;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub tariff: TariffConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Seed data for the in-memory collaborators: base prices per ticket type
/// and the holiday calendar.
#[derive(Debug, Deserialize, Clone)]
pub struct TariffConfig {
    #[serde(default)]
    pub base_prices: HashMap<String, u32>,
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, default to 'development'.
            // This file is optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Settings from the environment (with a prefix of GONDOLA)
            // Eg. `GONDOLA_SERVER__PORT=8080` would set `server.port`
            .add_source(config::Environment::with_prefix("GONDOLA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
