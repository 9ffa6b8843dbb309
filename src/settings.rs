//! Game settings and preferences
//!
//! Persisted as JSON next to the binary; a missing or malformed file falls
//! back to defaults rather than failing startup.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host-facing preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Integer scale factor the host applies to the 320x240 screen
    pub window_scale: u32,
    /// Show FPS counter
    pub show_fps: bool,
    /// Hold the prompt at a fixed scale instead of pulsing (accessibility)
    pub reduced_flicker: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_scale: 2,
            show_fps: false,
            reduced_flicker: false,
        }
    }
}

impl Settings {
    /// Settings file beside the binary
    pub const FILE_NAME: &'static str = "candy-drop-settings.json";

    /// Load settings, degrading to defaults with a logged warning
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("failed to read settings ({}), using defaults", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
