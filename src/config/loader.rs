//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::calculation::WageResolver;
use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// File name looked up inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # payroll, server and store settings
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Default wage: {}", loader.config().payroll.default_hourly_wage);
/// # Ok::<(), staffing_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `engine.yaml` is missing (`ConfigNotFound`)
    /// - `engine.yaml` is not valid YAML for [`EngineConfig`] (`ConfigParseError`)
    /// - the default wage is not positive (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml(&file_path)?;

        if config.payroll.default_hourly_wage <= 0 {
            return Err(EngineError::ConfigParseError {
                path: file_path.display().to_string(),
                message: format!(
                    "payroll.default_hourly_wage must be positive, got {}",
                    config.payroll.default_hourly_wage
                ),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    fn load_yaml(path: &Path) -> EngineResult<EngineConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds a wage resolver using the configured default wage.
    pub fn wage_resolver(&self) -> WageResolver {
        WageResolver::new(self.config.payroll.default_hourly_wage)
    }
}
