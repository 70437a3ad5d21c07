//! Configuration for graphkit
//!
//! Settings live in a TOML file. Lookup order: an explicit path, then
//! `$GRAPHKIT_CONFIG_DIR/config.toml`, then the platform config directory
//! (`~/.config/graphkit/config.toml` on Linux). A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphkitError, Result};

pub use types::{GraphkitConfig, InputConfig, MstConfig, TraversalConfig};

const CONFIG_DIR: &str = "graphkit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHKIT_CONFIG_DIR";

impl GraphkitConfig {
    /// Default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphkitError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: GraphkitConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphkitError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings no graph could satisfy
    pub fn validate(&self) -> Result<()> {
        let weight = self.input.default_weight;
        if !weight.is_finite() || weight.is_negative() {
            return Err(GraphkitError::Other(format!(
                "invalid config: input.default_weight must be a finite non-negative number, got {}",
                weight
            )));
        }
        if self.mst.prim_start == 0 {
            return Err(GraphkitError::Other(
                "invalid config: mst.prim_start must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
