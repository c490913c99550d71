use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, GALILEO_TLE_URL, Result};

/// Names a JSON file to load the configuration from.
pub const CONFIG_ENV: &str = "SKY_EPHEM_CONFIG";
pub const TLE_URL_ENV: &str = "SKY_EPHEM_TLE_URL";
pub const OUTPUT_ENV: &str = "SKY_EPHEM_OUTPUT";
pub const TIMEOUT_ENV: &str = "SKY_EPHEM_TIMEOUT";

/// Settings of the TLE download. Fields missing from a config file keep
/// their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tle_url: String,
    pub output_path: PathBuf,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tle_url: GALILEO_TLE_URL.to_string(),
            output_path: PathBuf::from("galileo.txt"),
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        debug!("config file {}", path.as_ref().display());
        Self::from_json(&content)
    }

    /// Builds the configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [Config::load] with a custom variable lookup.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(url) = lookup(TLE_URL_ENV) {
            config.tle_url = url;
        }
        if let Some(output) = lookup(OUTPUT_ENV) {
            config.output_path = PathBuf::from(output);
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            config.timeout_secs = timeout.trim().parse().map_err(|_| Error::InvalidConfig {
                key: TIMEOUT_ENV,
                value: timeout.clone(),
            })?;
        }
        debug!("{:?}", config);
        config.validate()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(self) -> Result<Self> {
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig {
                key: "timeout_secs",
                value: "0".to_string(),
            });
        }
        if self.tle_url.trim().is_empty() {
            return Err(Error::InvalidConfig {
                key: "tle_url",
                value: self.tle_url,
            });
        }
        Ok(self)
    }
}
