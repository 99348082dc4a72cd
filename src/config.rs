//! User configuration
//!
//! Read from a TOML file in the platform config directory
//! (e.g. `~/.config/tictactoe/tictactoe.toml` on Linux). Every field is
//! optional. The file is never written.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::board::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::error::ConfigError;

const CONFIG_FILE: &str = "tictactoe.toml";

/// Light/dark preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board size selected at start-up (3-8)
    pub board_size: usize,
    pub theme: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_SIZE,
            theme: ThemeMode::System,
        }
    }
}

impl Config {
    /// Parse a config from TOML text, clamping the board size
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut cfg: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.board_size = cfg.board_size.clamp(MIN_SIZE, MAX_SIZE);
        Ok(cfg)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load from `path`, or the default location when `None`. Errors are
    /// logged and replaced by the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(config_path) {
            Some(path) => path,
            None => return Self::default(),
        };
        Self::load(&path).unwrap_or_else(|err| {
            warn!(path = %err.path().display(), "{err}, using defaults");
            Self::default()
        })
    }
}

/// Default config file location
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tictactoe").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.board_size, 3);
        assert_eq!(cfg.theme, ThemeMode::System);
    }

    #[test]
    fn test_parse_full() {
        let cfg = Config::from_toml("board_size = 5\ntheme = \"dark\"\n", Path::new("t.toml")).unwrap();
        assert_eq!(cfg.board_size, 5);
        assert_eq!(cfg.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let cfg = Config::from_toml("theme = \"light\"", Path::new("t.toml")).unwrap();
        assert_eq!(cfg.board_size, DEFAULT_SIZE);
        assert_eq!(cfg.theme, ThemeMode::Light);
    }

    #[test]
    fn test_board_size_clamped() {
        let cfg = Config::from_toml("board_size = 42", Path::new("t.toml")).unwrap();
        assert_eq!(cfg.board_size, MAX_SIZE);
        let cfg = Config::from_toml("board_size = 0", Path::new("t.toml")).unwrap();
        assert_eq!(cfg.board_size, MIN_SIZE);
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml("theme = \"purple\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), Path::new("bad.toml"));
    }

    #[test]
    fn test_unreadable_file() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.path(), dir.path());

        assert_eq!(Config::load_or_default(Some(dir.path())), Config::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 7").unwrap();
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.board_size, 7);
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = [").unwrap();
        let cfg = Config::load_or_default(Some(file.path()));
        assert_eq!(cfg, Config::default());
    }
}
