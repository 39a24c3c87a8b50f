//! Client settings.
//!
//! Settings are read from a JSON file, either the path given on the command line or
//! `<config dir>/deskscene/config.json`. Missing fields take their default value and a missing
//! file means all defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
    /// Directory the scene's image files are read from.
    pub texture_dir: PathBuf,
    /// One of `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub mouse_sensitivity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Desk Scene".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            texture_dir: PathBuf::from("textures"),
            log_level: "info".to_string(),
            mouse_sensitivity: 0.1,
        }
    }
}

impl Config {
    /// The default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deskscene").join("config.json"))
    }

    /// Parses a config from JSON.
    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// Reads the config at `path`, or at [`Config::default_path`] when `path` is `None`.
    ///
    /// Logging is not set up yet when this runs, so instead of logging, a description of
    /// anything that went wrong is returned alongside the defaults.
    pub fn load(path: Option<&Path>) -> (Self, Option<String>) {
        let explicit = path.is_some();
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return (Self::default(), None);
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            // only complain about a missing file when it was asked for
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
                return (Self::default(), None);
            }
            Err(e) => {
                return (
                    Self::default(),
                    Some(format!("Could not read {}: {e}", path.display())),
                );
            }
        };

        match Self::from_json(&contents) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("Ignoring malformed config {}: {e}", path.display())),
            ),
        }
    }

    /// The configured log level, falling back to `info` for unknown names.
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_json(r#"{ "width": 800, "texture_dir": "assets/tex" }"#).unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 720);
        assert_eq!(config.texture_dir, PathBuf::from("assets/tex"));
    }

    #[test]
    fn test_malformed_config() {
        assert!(Config::from_json(r#"{ "width": "wide" }"#).is_err());
    }

    #[test]
    fn test_log_level() {
        let config = Config {
            log_level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Debug);

        let config = Config {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_missing_explicit_file_is_reported() {
        let (config, problem) = Config::load(Some(Path::new("/nonexistent/deskscene.json")));
        assert_eq!(config, Config::default());
        assert!(problem.is_some());
    }
}
