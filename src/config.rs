//! Runtime settings, read from a JSON file.
//!
//! Every field has a default, so a partial (or missing) file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::core::error::LayoutError;
use crate::ui::core::grid::Grid;

const SETTINGS_DIR: &str = "panegrid";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub reveal: RevealSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<PathBuf>,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_grab_delay_ms")]
    pub grab_delay_ms: u64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            device: None,
            poll_interval_ms: default_poll_interval_ms(),
            grab_delay_ms: default_grab_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSettings {
    #[serde(default = "default_chars_per_tick")]
    pub chars_per_tick: usize,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            chars_per_tick: default_chars_per_tick(),
        }
    }
}

fn default_width() -> i32 {
    Grid::DEFAULT.width()
}

fn default_height() -> i32 {
    Grid::DEFAULT.height()
}

fn default_poll_interval_ms() -> u64 {
    10
}

fn default_grab_delay_ms() -> u64 {
    1000
}

fn default_chars_per_tick() -> usize {
    1
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "read {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if given, else the default location if that file exists.
    /// A missing default file yields the defaults; anything else that goes
    /// wrong is returned.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_settings_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn grid(&self) -> Result<Grid, LayoutError> {
        Grid::new(self.grid.width, self.grid.height)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.input.poll_interval_ms)
    }

    pub fn grab_delay(&self) -> Duration {
        Duration::from_millis(self.input.grab_delay_ms)
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
