mod basic;
mod inspect;

pub use basic::BasicConfig;
pub use inspect::InspectConfig;

use crate::error::ScopeError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Decoder settings (see `inspect` table in config.toml).
    #[serde(default)]
    pub inspect: InspectConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "JWTSCOPE_";

impl Config {
    /// Builds a Figment that merges defaults, `config.toml` if present, then
    /// `JWTSCOPE_`-prefixed environment variables (`__` separates tables,
    /// e.g. `JWTSCOPE_BASIC__LISTEN_PORT`).
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts the configuration from [`Config::figment`].
    pub fn load() -> Result<Self, ScopeError> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ScopeError> {
        Ok(figment.extract()?)
    }
}
