//! Application settings
//!
//! Stored as JSON in `<config dir>/noveltree/config.json`. A missing file
//! yields the defaults; an unreadable one is logged and replaced by the
//! defaults on the next save.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use novel_core::{NovelError, NovelResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dark_mode: bool,

    /// Translation catalog (JSON object file)
    pub catalog: Option<PathBuf>,

    pub window_width: f32,
    pub window_height: f32,

    /// Reopened on start when no file is given on the command line
    pub last_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dark_mode: false,
            catalog: None,
            window_width: 1100.0,
            window_height: 720.0,
            last_file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("noveltree").join("config.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("no config directory on this platform, using default settings");
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring settings file");
            Config::default()
        })
    }

    pub fn load_from(path: &Path) -> NovelResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            NovelError::file_error("read settings", path.display().to_string(), e.to_string())
        })?;
        serde_json::from_str(&contents).map_err(|e| NovelError::SerializationError {
            reason: format!("Invalid settings in {}: {}", path.display(), e),
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> NovelResult<()> {
        let path = Self::default_path()
            .ok_or_else(|| NovelError::file_error("save settings", "<config dir>", "no config directory"))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> NovelResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                NovelError::file_error("create directory", dir.display().to_string(), e.to_string())
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| NovelError::SerializationError {
            reason: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| {
            NovelError::file_error("write settings", path.display().to_string(), e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_dir().join("noveltree_test_settings").join("config.json");
        let config = Config {
            dark_mode: true,
            last_file: Some(PathBuf::from("/tmp/story.novx")),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let path = temp_dir().join("noveltree_test_partial_settings.json");
        fs::write(&path, r#"{"dark_mode": true}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.window_width, 1100.0);
        assert_eq!(loaded.catalog, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_settings_file() {
        let path = temp_dir().join("noveltree_test_bad_settings.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(Config::load_from(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
