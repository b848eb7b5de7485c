use crate::error::{AddrBookError, Result};
use crate::model::PhoneCheck;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const PHONE_CHECK_KEY: &str = "phone-check";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Validation applied to new phone numbers
    #[serde(default)]
    pub phone_check: PhoneCheck,
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[PHONE_CHECK_KEY]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            PHONE_CHECK_KEY => Some(self.phone_check.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            PHONE_CHECK_KEY => {
                self.phone_check = value.parse().map_err(AddrBookError::Config)?;
                Ok(())
            }
            other => Err(AddrBookError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }
}
