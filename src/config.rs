//! Configuration manager for peppermill.

use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
/// Environment variable overriding the configured peppers.
pub const PEPPERS_ENV: &str = "PEPPERS";

#[derive(Default, Clone, PartialEq, Deserialize)]
pub struct Configuration {
    /// Peppers, current one first.
    #[serde(default)]
    pub peppers: Vec<String>,
    #[serde(skip)]
    path: PathBuf,
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("peppers", &self.peppers.len())
            .field("path", &self.path)
            .finish()
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Reads the file at the specified path, or `config.yaml` when no path
    /// was set, then applies the `PEPPERS` environment variable.
    ///
    /// A missing file yields no peppers; peppered hashing is then disabled.
    /// Any other I/O failure is an error.
    pub fn read(self) -> Result<Self, ConfigError> {
        let file_path = if self.path.as_os_str().is_empty() {
            Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        } else {
            self.path.clone()
        };

        let mut config = match File::open(&file_path) {
            Ok(file) => {
                let config: Configuration = serde_yaml::from_reader(file)?;
                config.path(file_path)
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(error = %err, path = %file_path.display(), "configuration file not found");
                self.path(file_path)
            },
            Err(err) => {
                tracing::error!(error = %err, path = %file_path.display(), "cannot open configuration file");
                return Err(ConfigError::Io(err));
            },
        };

        if let Ok(value) = std::env::var(PEPPERS_ENV) {
            config.peppers = parse_peppers(&value);
        }

        config.validate()?;
        tracing::info!(peppers = config.peppers.len(), "configuration loaded");

        Ok(config)
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Configuration = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty and duplicated peppers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.peppers.len());

        for (position, pepper) in self.peppers.iter().enumerate() {
            if pepper.trim().is_empty() {
                return Err(ConfigError::EmptyPepper { position });
            }
            if !seen.insert(pepper.as_str()) {
                return Err(ConfigError::DuplicatePepper { position });
            }
        }

        Ok(())
    }
}

/// Split a comma-separated pepper list, current one first.
pub fn parse_peppers(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }

    value.split(',').map(|p| p.trim().to_owned()).collect()
}
