//! Configuration for routefinder
//!
//! Read from `routefinder.toml`. Lookup order: an explicit path, the working
//! directory, then `<user config dir>/routefinder/config.toml`. Without any
//! file the defaults apply.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, RouteError};

pub use types::{
    MapConfig, RouteConfig, SearchConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION,
};

impl MapConfig {
    /// The delimiter as a character
    pub fn delimiter_char(&self) -> Result<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(RouteError::invalid_value(
                "map delimiter",
                format!("{:?} (expected a single character)", self.delimiter),
            )),
        }
    }
}

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RouteConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            return Err(RouteError::invalid_value(
                "config version",
                format!("{} (newest supported: {})", self.version, CONFIG_FORMAT_VERSION),
            ));
        }
        self.map.delimiter_char()?;
        Ok(())
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        for candidate in Self::candidates(cwd) {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "config_found");
                return Self::load(&candidate);
            }
        }

        debug!("config_default");
        Ok(Self::default())
    }

    fn candidates(cwd: &Path) -> Vec<PathBuf> {
        let mut paths = vec![cwd.join(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("routefinder").join("config.toml"));
        }
        paths
    }
}
