// Chunk: docs/chunks/editor_config - Config file resolution and parsing
//!
//! User configuration.
//!
//! The configuration is read once at startup from:
//! - macOS: `~/Library/Application Support/mesa-notepad/config.json`
//! - other platforms: `dirs::config_dir()/mesa-notepad/config.json`
//!
//! Every field is optional. A missing file yields the defaults; a file that
//! cannot be read or parsed is reported in the log and also yields the
//! defaults. The editor never writes this file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Application name used for the config directory.
const APP_NAME: &str = "mesa-notepad";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Title of the main window
    pub window_title: String,
    /// Initial content width of the window, in points
    pub window_width: f64,
    /// Initial content height of the window, in points
    pub window_height: f64,
    /// Font size of the text surfaces, in points
    pub font_size: f64,
    /// Use the system fixed-pitch font instead of the proportional one
    pub monospace: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "Mesa's Notepad".to_string(),
            window_width: 1000.0,
            window_height: 700.0,
            font_size: 13.0,
            monospace: true,
        }
    }
}

impl EditorConfig {
    /// Parses a configuration file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads the configuration from `path`, falling back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(config)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Loads the configuration from the platform config directory.
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }
}

/// Returns the path of the config file.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn config_file_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_NAME).join(CONFIG_FILENAME))
}
