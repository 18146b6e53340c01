//! Configuration service.
//!
//! Loads [`AppConfig`] from `config.toml`. A missing file is created with the
//! defaults; an unreadable one is reported as an error and left alone so it
//! can be fixed by hand.

use std::fs;
use std::path::{Path, PathBuf};

use rusikaram_core::config::AppConfig;
use rusikaram_core::error::{Result, RusikaramError};

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, writing the defaults first if the file does
    /// not exist yet.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            let config = AppConfig::default();
            self.save(&config)?;
            tracing::info!(path = %self.path.display(), "Created default configuration");
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .map_err(|e| RusikaramError::io(format!("Failed to write config: {}", e)))
    }
}
