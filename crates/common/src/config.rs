// crates/common/src/config.rs
use crate::{Error, Mode, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/panel.toml";
pub const CONFIG_PATH_ENV: &str = "CVATH_CONFIG";

/// Panel app configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub panel: PanelSection,
    pub window: WindowSection,
    pub theme: ThemeSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelSection {
    pub title: String,
    pub default_mode: Mode,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl Default for PanelSection {
    fn default() -> Self {
        Self {
            title: "CVATH Analyzer".to_string(),
            default_mode: Mode::DipBuy,
            x: 40.0,
            y: 40.0,
            width: 280.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    pub dark: bool,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self { dark: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl PanelConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Load from `CVATH_CONFIG` or the default path.
    ///
    /// `Ok(None)` when no file exists there; a file that fails to parse is an
    /// error.
    pub fn load() -> Result<Option<Self>> {
        let path = config_path();
        if !path.exists() {
            return Ok(None);
        }
        Self::from_file(&path).map(Some)
    }
}

pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}
