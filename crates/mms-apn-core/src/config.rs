//! Resolver configuration.
//!
//! ```toml
//! apn_type = "mms"
//! apn_name = "mms.operator"
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::apn::record::APN_TYPE_MMS;
use crate::error::{Error, Result};
use crate::logging::{parse_log_level, LoggingConfig};

/// Configuration for loading MMS APN settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApnConfig {
    /// APN type to request
    pub apn_type: String,
    /// Access point name to restrict lookups to when the caller gives none
    pub apn_name: Option<String>,
    /// Logging settings
    pub logging: LogSettings,
}

impl Default for ApnConfig {
    fn default() -> Self {
        Self {
            apn_type: APN_TYPE_MMS.to_string(),
            apn_name: None,
            logging: LogSettings::default(),
        }
    }
}

impl ApnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_apn_type(mut self, apn_type: impl Into<String>) -> Self {
        self.apn_type = apn_type.into();
        self
    }

    pub fn with_apn_name(mut self, apn_name: impl Into<String>) -> Self {
        self.apn_name = Some(apn_name.into());
        self
    }

    pub fn with_logging(mut self, logging: LogSettings) -> Self {
        self.logging = logging;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: ApnConfig = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let apn_type = self.apn_type.trim();
        if apn_type.is_empty() {
            return Err(Error::Config("apn_type must not be empty".to_string()));
        }
        if apn_type != self.apn_type || apn_type.contains(',') {
            return Err(Error::Config(format!(
                "apn_type must be a single type without whitespace: {:?}",
                self.apn_type
            )));
        }
        parse_log_level(&self.logging.level)?;
        Ok(())
    }
}

/// Logging section of [`ApnConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level name (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LogSettings {
    /// Convert into a [`LoggingConfig`] for [`setup_logging`](crate::logging::setup_logging)
    pub fn to_logging_config(&self, app_name: &str) -> Result<LoggingConfig> {
        let mut config = LoggingConfig::new(parse_log_level(&self.level)?, app_name);
        if self.json {
            config = config.with_json();
        }
        Ok(config)
    }
}
