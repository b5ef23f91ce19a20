//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dectree/dectree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `DECTREE_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::DEFAULT_TERMINATION_RATIO;
use crate::infrastructure::InfraError;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DECTREE";

/// Unified configuration for dectree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Majority-label purity at which tree growth stops, in (0, 1]
    pub termination_ratio: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            termination_ratio: DEFAULT_TERMINATION_RATIO,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub termination_ratio: Option<f64>,
}

/// Get the XDG config directory for dectree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dectree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dectree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, InfraError> {
    let content = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| InfraError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            termination_ratio: overlay.termination_ratio.unwrap_or(self.termination_ratio),
        }
    }

    /// Load and validate settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Config file named on the command line; it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, InfraError> {
        let settings = Self::load_layers(explicit)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Merge every layer without validating, so a caller can apply further
    /// overrides before checking the result.
    pub fn load_layers(explicit: Option<&Path>) -> Result<Self, InfraError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            debug!("Loading config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current, ENV_PREFIX)
    }

    /// Apply `<prefix>_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, prefix: &str) -> Result<Self, InfraError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        match config.get_float("termination_ratio") {
            Ok(val) => settings.termination_ratio = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Reject values the tree builder cannot work with.
    pub fn validate(&self) -> Result<(), InfraError> {
        let ratio = self.termination_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(InfraError::Config {
                message: format!("termination_ratio must be in (0, 1], got {}", ratio),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, InfraError> {
        toml::to_string_pretty(self).map_err(|e| InfraError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> InfraError {
    InfraError::Config {
        message: e.to_string(),
    }
}
