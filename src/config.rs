use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    DEFAULT_CONFIG_PATH,
    utils::price::{PricingRates, PricingRatesError},
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid pricing rates: {0}")]
    Invalid(#[from] PricingRatesError),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub rates: PricingRates,
    pub output: OutputSettings,
}

impl Settings {
    pub fn load(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let settings = match Self::load_from_file(config_path) {
            Ok(settings) => settings,
            Err(err) if config_path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.");
                Self::default()
            }
            Err(err) => return Err(err),
        };

        settings.rates.validate()?;

        Ok(settings)
    }

    fn load_from_file(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let (path, required) = match config_path.as_deref() {
            Some(path) => (path, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let config = Config::builder()
            .add_source(File::with_name(path).required(required))
            .build()?
            .try_deserialize::<Settings>()?;

        debug!("Settings resolved from {path}");

        Ok(config)
    }
}
