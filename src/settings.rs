//! Ambient configuration
//!
//! Loaded from a TOML file under the platform config directory; every field
//! has a default so a missing or partial file is fine. The settings cover
//! logging switches and the document identifiers the label is injected
//! with; the indicator behavior itself is not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::LabelSpec;

/// Logging switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Force debug-level output regardless of the environment filter
    pub verbose: bool,

    /// Emit JSON log lines instead of the human-readable format
    pub json: bool,
}

/// CipherBar configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,

    /// Overrides for the injected label's element identifiers, for hosts
    /// whose identity box uses different ids
    pub label: LabelSpec,
}

impl Settings {
    /// Default config file location: `<config dir>/cipherbar/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cipherbar").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when no
    /// file exists
    pub fn load() -> anyhow::Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
