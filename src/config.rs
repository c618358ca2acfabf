//! Application configuration
//!
//! Read from JSON. Every field has a default, so a config file only needs to
//! name what it changes:
//!
//! ```json
//! {
//!   "window": { "title": "My menu", "width": 640, "height": 360 },
//!   "layout": { "greeting": "Welcome back" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::gui::{MAIN_SCREEN, MenuLayout};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "GUI app".to_string(),
            width: 800,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Menu configuration key handed to the menu builder
    pub menu: String,
    /// Frame cap in frames per second; 0 disables the cap
    pub frame_rate: u32,
    pub layout: MenuLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window: WindowConfig::default(),
            menu: MAIN_SCREEN.to_string(),
            frame_rate: 60,
            layout: MenuLayout::default(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config dir>/guiapp/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("guiapp").join("config.json"))
    }

    /// Loads the default config file, or built-in defaults when there is none
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => {
                warn!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_or_default_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            debug!(path = %path.display(), "loading config");
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Time budget of one frame, `None` when uncapped
    pub fn frame_time(&self) -> Option<std::time::Duration> {
        match self.frame_rate {
            0 => None,
            fps => Some(std::time::Duration::from_nanos(1_000_000_000 / fps as u64)),
        }
    }
}
