//! Configuration for the gallery client
//!
//! Settings load once at startup from `config.json` under the platform
//! config directory. A missing file means defaults; a malformed file is
//! logged and defaulted rather than aborting. `EASEL_SERVER_URL` overrides
//! the configured server URL for the session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration read at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the drawing service
    pub server_url: String,
    /// Canvas size in pixels for the editor and viewer
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Default brush color (opaque color string, hex or named)
    pub brush_color: String,
    /// Default brush width in pixels
    pub brush_width: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:4321".to_string(),
            canvas_width: 800.0,
            canvas_height: 600.0,
            brush_color: "#ff0000".to_string(),
            brush_width: 5.0,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("easel").join("config.json"))
    }

    /// Load configuration, falling back to defaults on any problem and
    /// applying the `EASEL_SERVER_URL` override last.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("no config directory on this platform, using defaults");
                Self::default()
            }
        };
        if let Ok(url) = std::env::var("EASEL_SERVER_URL") {
            if !url.trim().is_empty() {
                config.server_url = url;
            }
        }
        config
    }

    fn load_from(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("malformed config at {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"server_url": "http://art.example:9000"}}"#).unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.server_url, "http://art.example:9000");
        assert_eq!(config.brush_width, AppConfig::default().brush_width);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}
