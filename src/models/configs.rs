use std::path::Path;

use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use serde::Deserialize;

use crate::models::constants::{DEFAULT_CITIES, DEFAULT_ENDPOINT};

/// Which `RecommendationClient` the service is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    #[default]
    Http,
    /// Canned responses, debug builds only.
    Mock,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Full URL of the recommendation endpoint, query string excluded.
    pub endpoint: String,
    pub client: ClientKind,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: ClientKind::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Cities offered as completions for the city field.
    pub cities: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Boot time static configs.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub form: FormConfig,
}

impl Config {
    /// Loads the configuration from the default location (using $XDG_CONFIG_HOME if exists or the
    /// platform’s standard config directory). If the config file doesn’t exist, returns the
    /// built-in default configuration.
    pub fn load() -> Result<Self> {
        const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
        const FOODREC_CONFIG_PATH: &str = "foodrec/config.toml";

        let config_dir = std::env::var(XDG_CONFIG_HOME)
            .map(std::path::PathBuf::from)
            .or_else(|_| dirs::config_dir().ok_or_else(|| eyre!("failed to get config dir")))?;
        Self::from_path(&config_dir.join(FOODREC_CONFIG_PATH))
    }

    fn from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::info!(
                "{} does not exist, using default config",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let cfg_str = std::fs::read_to_string(config_path)
            .wrap_err_with(|| format!("failed to read file: {}", config_path.display()))?;
        let cfg = Self::parse(&cfg_str)
            .wrap_err_with(|| format!("failed to parse config: {}", config_path.display()))?;
        tracing::info!(?cfg, "loaded config from {}", config_path.display());
        Ok(cfg)
    }

    fn parse(cfg_str: &str) -> Result<Self> {
        Ok(toml::from_str(cfg_str)?)
    }
}
