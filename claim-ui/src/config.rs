//! Site configuration loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use claim_core::leads::LeadConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::DEFAULT_LEVEL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Firm details shown on results pages, plus where leads and logs go.
///
/// Every key is optional:
///
/// ```toml
/// firm_name = "Trembach Law"
/// phone_display = "(818) 123-4567"
/// phone_dial = "8181234567"
/// log_level = "info"
///
/// [leads]
/// backend = "log"
/// target = "intake"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub firm_name: String,
    pub phone_display: String,
    /// Digits only; used for the `tel:` link.
    pub phone_dial: String,
    pub log_level: String,
    pub leads: LeadConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            firm_name: "Trembach Law".to_string(),
            phone_display: "(818) 123-4567".to_string(),
            phone_dial: "8181234567".to_string(),
            log_level: DEFAULT_LEVEL.to_string(),
            leads: LeadConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}
