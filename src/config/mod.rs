//! Configuration loading and management for the staffing engine.
//!
//! This module loads the engine configuration from a YAML file: the default
//! hourly wage, the HTTP bind address, and the record store snapshot path.
//!
//! # Example
//!
//! ```no_run
//! use staffing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Listening on {}", config.config().server.bind_address);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{EngineConfig, PayrollConfig, ServerConfig, StoreConfig};
