//! Configuration types for the staffing engine.
//!
//! These structures are deserialized from `engine.yaml`. Every section and
//! key is optional; missing values fall back to the defaults below.

use serde::Deserialize;

use crate::calculation::DEFAULT_HOURLY_WAGE;

/// Payroll settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Wage applied when an employee has no effective wage record.
    pub default_hourly_wage: i64,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            default_hourly_wage: DEFAULT_HOURLY_WAGE,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON snapshot loaded into the in-memory store.
    pub snapshot_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_path: "./data/demo_snapshot.json".to_string(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Payroll settings.
    pub payroll: PayrollConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Record store settings.
    pub store: StoreConfig,
}
