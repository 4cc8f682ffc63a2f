//! Host-managed preferences.
//!
//! The launcher host exposes a small preference surface; this build reads it
//! from `<config_dir>/nook/config.toml`. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Preferences the user sets through the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Terminal emulator preference, e.g. "gnome" or "tilix".
    ///
    /// Kept as the raw string: values without a launch-table entry make
    /// "Open in Terminal" a silent no-op rather than an error.
    #[serde(default = "default_terminal")]
    pub default_terminal: String,
}

fn default_terminal() -> String {
    "gnome".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_terminal: default_terminal(),
        }
    }
}

impl Preferences {
    /// Load preferences from the default config path.
    ///
    /// A missing file yields defaults; an unreadable or unparsable file is
    /// an error the caller decides how to handle.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    /// Load preferences from a specific TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nook"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.default_terminal, "gnome");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_terminal = \"tilix\"").unwrap();
        let prefs = Preferences::from_path(file.path()).unwrap();
        assert_eq!(prefs.default_terminal, "tilix");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let prefs = Preferences::from_path(file.path()).unwrap();
        assert_eq!(prefs.default_terminal, "gnome");
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_terminal = [").unwrap();
        let err = Preferences::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
