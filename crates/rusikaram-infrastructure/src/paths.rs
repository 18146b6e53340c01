//! Unified path management for Rusikaram files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/rusikaram/           # Config directory
//! └── config.toml                # Application configuration
//!
//! ~/.local/share/rusikaram/      # Data directory (overridable)
//! ├── store.json                 # customerDB, orders, currentForm
//! └── logs/
//!     └── rusikaram.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR_NAME: &str = "rusikaram";
const CONFIG_FILE_NAME: &str = "config.toml";
const STORE_FILE_NAME: &str = "store.json";
const LOGS_DIR_NAME: &str = "logs";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved locations of every file the application touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RusikaramPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
}

impl RusikaramPaths {
    /// Platform config directory, e.g. `~/.config/rusikaram/`.
    pub fn default_config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Platform data directory, e.g. `~/.local/share/rusikaram/`.
    pub fn default_data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn default_config_file() -> Result<PathBuf, PathError> {
        Ok(Self::default_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Resolves paths, preferring explicit overrides over platform defaults.
    pub fn resolve(
        config_file: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, PathError> {
        let config_file = match config_file {
            Some(path) => path,
            None => Self::default_config_file()?,
        };
        let data_dir = match data_dir {
            Some(path) => path,
            None => Self::default_data_dir()?,
        };
        Ok(Self {
            config_file,
            data_dir,
        })
    }

    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join(LOGS_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let paths = RusikaramPaths::resolve(
            Some(PathBuf::from("/etc/rusikaram.toml")),
            Some(PathBuf::from("/srv/orders")),
        )
        .unwrap();

        assert_eq!(paths.config_file, PathBuf::from("/etc/rusikaram.toml"));
        assert_eq!(paths.store_file(), PathBuf::from("/srv/orders/store.json"));
        assert_eq!(paths.logs_dir(), PathBuf::from("/srv/orders/logs"));
    }

    #[test]
    fn test_default_dirs_end_with_app_name() {
        // Skipped on machines without a home directory.
        if let Ok(dir) = RusikaramPaths::default_config_dir() {
            assert!(dir.ends_with("rusikaram"));
        }
        if let Ok(dir) = RusikaramPaths::default_data_dir() {
            assert!(dir.ends_with("rusikaram"));
        }
    }
}
